use super::DemoCommand;
use std::iter::Peekable;
use target::{Target, TargetArch, TargetOs};

impl DemoCommand {
    pub fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<Self, ()> {
        if args.peek().map(String::as_str) == Some("demo") {
            args.next();
        }

        let mut arch = TargetArch::X86_64;
        let mut os = TargetOs::Linux;

        while let Some(option) = args.next() {
            match option.as_str() {
                "--arch" => {
                    let Some(value) = args.next() else {
                        eprintln!("error: Expected architecture after '--arch'");
                        return Err(());
                    };

                    let Ok(parsed) = value.parse() else {
                        eprintln!("error: Unknown architecture '{}'", value);
                        return Err(());
                    };

                    arch = parsed;
                }
                "--os" => {
                    let Some(value) = args.next() else {
                        eprintln!("error: Expected operating system after '--os'");
                        return Err(());
                    };

                    let Ok(parsed) = value.parse() else {
                        eprintln!("error: Unknown operating system '{}'", value);
                        return Err(());
                    };

                    os = parsed;
                }
                _ => {
                    eprintln!("error: Unknown option '{}'", option);
                    return Err(());
                }
            }
        }

        Ok(Self {
            target: Target::new(os, arch),
        })
    }
}
