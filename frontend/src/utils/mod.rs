pub mod dom_events;
pub mod dom_surface;
pub mod events;
pub mod surface;
#[cfg(test)]
pub mod test_support;
