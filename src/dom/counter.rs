use std::cell::Cell;
use std::rc::Rc;
use super::Element;

pub fn counter_text(count: u64) -> String {
    format!("count is {}", count)
}

/// Wires a click counter to `element`, starting from zero.
///
/// Every call owns a fresh counter; the element text is written immediately
/// and after each click.
pub fn setup_counter(element: &Element) {
    let count = Rc::new(Cell::new(0u64));
    element.set_inner_html(counter_text(count.get()));

    element.add_click_listener(move |target| {
        count.set(count.get().saturating_add(1));
        target.set_inner_html(counter_text(count.get()));
    });
}
