#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub term: String,
    pub position: u32,
}
