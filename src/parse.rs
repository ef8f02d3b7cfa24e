//! Reading permutations from text.
//!
//! Both the cycle notation produced by `Display`, like `(1 2)(3 7 5 4)`, and the reconstruction
//! code produced by `Debug`, like `perm!((1, 2), (3, 7, 5, 4))`, are accepted.
use std::str::FromStr;

use crate::error::ParseError;
use crate::perm::Permutation;
use crate::Point;

impl FromStr for Permutation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cycles = Parser { text: s, pos: 0 }.permutation()?;
        Ok(Permutation::from_cycles(&cycles)?)
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn permutation(&mut self) -> Result<Vec<Vec<Point>>, ParseError> {
        self.skip_whitespace();
        if self.rest().starts_with("perm") {
            self.pos += "perm".len();
            self.eat('!');
            self.expect('(')?;
            let cycles = self.cycles(Some(')'))?;
            self.skip_whitespace();
            match self.peek() {
                None => Ok(cycles),
                Some(_) => Err(self.unexpected()),
            }
        } else {
            self.cycles(None)
        }
    }

    /// Cycles up to the closing character, or to the end of the input.
    fn cycles(&mut self, close: Option<char>) -> Result<Vec<Vec<Point>>, ParseError> {
        let mut cycles = vec![];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('(') => {
                    cycles.push(self.cycle()?);
                    self.eat(',');
                }
                next if next == close => {
                    self.bump();
                    return Ok(cycles);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn cycle(&mut self) -> Result<Vec<Point>, ParseError> {
        self.expect('(')?;
        let mut cycle = vec![];
        loop {
            if self.eat(')') {
                return Ok(cycle);
            }
            cycle.push(self.point()?);
            self.eat(',');
        }
    }

    fn point(&mut self) -> Result<Point, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().map_or(false, |c| c.is_ascii_alphanumeric()) {
            self.bump();
        }
        let token = &self.text[start..self.pos];
        if token.is_empty() {
            return Err(self.unexpected());
        }
        token
            .parse()
            .map_err(|_| ParseError::InvalidPoint(token.to_owned()))
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    /// Skip whitespace and consume `c` if it comes next.
    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::UnexpectedChar {
                position: self.pos,
                found,
            },
            None => ParseError::UnexpectedEnd,
        }
    }
}
