#[derive(Debug)]
pub enum Event {
    /// A post was submitted elsewhere, the nearby list should be refreshed
    PostCreated,
}
