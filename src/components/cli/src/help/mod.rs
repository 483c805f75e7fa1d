mod invoke;

use std::iter::Peekable;

#[derive(Clone, Debug)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn parse(_args: Peekable<impl Iterator<Item = String>>) -> Result<Self, ()> {
        Ok(Self)
    }
}
