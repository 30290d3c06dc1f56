use super::{CommandContext, CommandOption, Control, InternalCommand};

pub struct Exit;

const OPTIONS: &[CommandOption] = &[CommandOption {
    name: "--help",
    description: "show usage instead of exiting",
}];

impl InternalCommand for Exit {
    fn name(&self) -> &'static str {
        ":exit"
    }

    fn description(&self) -> &'static str {
        "leave the shell"
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
        if ctx.has_flag("--help") {
            return match writeln!(ctx.out, "{}", self.usage()) {
                Ok(()) => Control::Status(0),
                Err(_) => Control::Status(1),
            };
        }
        Control::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CommandCatalog;
    use crate::commands::Commander;

    fn run(args: &[&str]) -> (Control, String, String) {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let catalog = CommandCatalog::default();
        let commander = Commander::builtin();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = CommandContext {
            args: &args,
            catalog: &catalog,
            commander: &commander,
            out: &mut out,
            err: &mut err,
        };
        let control = Exit.run(&mut ctx);
        (
            control,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn exit_requests_exit() {
        assert_eq!(run(&[]).0, Control::Exit);
    }

    #[test]
    fn exit_help_prints_usage() {
        let (control, out, _) = run(&["--help"]);
        assert_eq!(control, Control::Status(0));
        assert!(out.starts_with("usage: :exit"));
    }

    #[test]
    fn exit_rejects_unknown_args() {
        let (control, _, err) = run(&["now"]);
        assert_eq!(control, Control::Status(2));
        assert!(err.contains("unexpected argument(s): now"));
    }
}
