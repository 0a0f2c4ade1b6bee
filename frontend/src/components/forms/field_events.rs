use std::str::FromStr;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared::FormError;
use crate::services::logging::Logger;

pub fn input_value(e: &Event) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &Event) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Callback for a text input that forwards `make(value)` to `update`
pub fn on_input<U: 'static>(update: &Callback<U>, make: fn(String) -> U) -> Callback<Event> {
    update.reform(move |e: Event| make(input_value(&e)))
}

pub fn on_textarea<U: 'static>(update: &Callback<U>, make: fn(String) -> U) -> Callback<Event> {
    update.reform(move |e: Event| make(textarea_value(&e)))
}

/// Callback for a select whose option values are labels of `T`.
///
/// A label that does not parse is logged and dropped.
pub fn on_select<T, U>(component: &'static str, update: &Callback<U>, make: fn(T) -> U) -> Callback<Event>
where
    T: FromStr<Err = FormError> + 'static,
    U: 'static,
{
    let update = update.clone();
    Callback::from(move |e: Event| match parse_label::<T>(&select_value(&e)) {
        Ok(value) => update.emit(make(value)),
        Err(err) => Logger::warn_with_component(component, &err.to_string()),
    })
}

fn parse_label<T: FromStr<Err = FormError>>(label: &str) -> Result<T, FormError> {
    label.parse::<T>()
}
