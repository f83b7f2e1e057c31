use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SymbolsConfig {
    pub human: char,
    pub computer: char,
}

impl SymbolsConfig {
    fn validate_symbol(name: &str, symbol: char) -> Result<(), String> {
        if symbol.is_whitespace() {
            return Err(format!("{} symbol must not be whitespace", name));
        }
        // Digits label empty cells and brackets mark the winning line.
        if symbol.is_ascii_digit() || symbol == '[' || symbol == ']' {
            return Err(format!("{} symbol '{}' is reserved", name, symbol));
        }
        Ok(())
    }
}

impl Validate for SymbolsConfig {
    fn validate(&self) -> Result<(), String> {
        Self::validate_symbol("Human", self.human)?;
        Self::validate_symbol("Computer", self.computer)?;
        if self.human == self.computer {
            return Err(format!(
                "Human and computer symbols must differ, both are '{}'",
                self.human
            ));
        }
        Ok(())
    }
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            human: 'o',
            computer: 'x',
        }
    }
}
