use std::io;

use super::{CommandContext, CommandOption, Control, InternalCommand};

pub struct Help;

const OPTIONS: &[CommandOption] = &[
    CommandOption {
        name: "--all",
        description: "also list git commands",
    },
    CommandOption {
        name: "--help",
        description: "show usage",
    },
];

impl Help {
    fn write_listing(&self, ctx: &mut CommandContext) -> io::Result<()> {
        writeln!(ctx.out, "Built-in commands:")?;
        for command in ctx.commander.commands() {
            writeln!(ctx.out, "    {:<10}{}", command.name(), command.description())?;
        }
        writeln!(ctx.out, "Any other command runs as `git <command>`.")?;
        if ctx.has_flag("--all") {
            writeln!(ctx.out, "\nGit commands:")?;
            for name in ctx.catalog.git_command_names() {
                writeln!(ctx.out, "    {name}")?;
            }
        }
        Ok(())
    }
}

impl InternalCommand for Help {
    fn name(&self) -> &'static str {
        ":help"
    }

    fn description(&self) -> &'static str {
        "list built-in commands"
    }

    fn options(&self) -> &'static [CommandOption] {
        OPTIONS
    }

    fn run(&self, ctx: &mut CommandContext) -> Control {
        let unknown = ctx.unknown_args(self);
        if !unknown.is_empty() {
            ctx.usage_error(self, &unknown);
            return Control::Status(2);
        }
        let written = if ctx.has_flag("--help") {
            writeln!(ctx.out, "{}", self.usage())
        } else {
            self.write_listing(ctx)
        };
        match written {
            Ok(()) => Control::Status(0),
            Err(_) => Control::Status(1),
        }
    }
}
