pub mod standard;

use token::Token;
use analysis::tokenizers::standard::StandardTokenizer;


#[derive(Debug, Clone, PartialEq)]
pub enum TokenizerSpec {
    Standard,
}


impl TokenizerSpec {
    pub fn initialise<'a>(&self, input: &'a str) -> Box<Iterator<Item=Token> + 'a> {
        match *self {
            TokenizerSpec::Standard => {
                Box::new(StandardTokenizer::new(input))
            }
        }
    }
}
