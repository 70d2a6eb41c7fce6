//! Converts each token into lowercase

use token::Token;


pub struct LowercaseFilter<'a> {
    tokens: Box<Iterator<Item=Token> + 'a>,
}


impl<'a> LowercaseFilter<'a> {
    pub fn new(tokens: Box<Iterator<Item=Token> +'a>) -> LowercaseFilter<'a> {
        LowercaseFilter {
            tokens: tokens,
        }
    }
}


impl<'a> Iterator for LowercaseFilter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.tokens.next() {
            Some(token) => {
                Some(Token {
                    term: token.term.to_lowercase(),
                    position: token.position,
                })
            }
            None => None
        }
    }
}
