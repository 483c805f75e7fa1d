mod demo;
mod help;

use demo::DemoCommand;
use enum_dispatch::enum_dispatch;
use help::HelpCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Demo(DemoCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        let mut args = std::env::args().skip(1).peekable();

        match args.peek().map(String::as_str) {
            Some("-h" | "--help" | "help") => HelpCommand::parse(args).map(Self::from),
            _ => DemoCommand::parse(args).map(Self::from),
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}
