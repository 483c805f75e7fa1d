use super::HelpCommand;
use crate::Invoke;
use indoc::indoc;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        println!(indoc! {"
            usage: structlayout [demo] [--arch ARCH] [--os OS]

            commands:
              demo    print the example record catalog (default)
              help    show this message

            options:
              --arch ARCH    x86 | x86_64 | arm | aarch64   (default x86_64)
              --os OS        linux | macos | windows        (default linux)
        "});
        Err(())
    }
}
