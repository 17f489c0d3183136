use std::fmt;

/// Payment tiers offered at checkout, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Credit,
    PayPay,
    AuPay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Credit, Self::PayPay, Self::AuPay];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::PayPay => "PAYPAY",
            Self::AuPay => "AUPAY",
        }
    }

    /// Joins tags with commas, keeping the order they were given in.
    pub fn join(methods: &[PaymentMethod]) -> String {
        methods
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
