// crates/cli/src/validate.rs

use crate::error::ExitCode;

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp | DisplayVersion => ExitCode::Ok,
        Io | Format => ExitCode::Io,
        _ => ExitCode::Usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind::*;

    #[test]
    fn maps_error_kinds_to_exit_codes() {
        let cases = [
            (InvalidValue, ExitCode::Usage),
            (UnknownArgument, ExitCode::Usage),
            (InvalidSubcommand, ExitCode::Usage),
            (MissingRequiredArgument, ExitCode::Usage),
            (MissingSubcommand, ExitCode::Usage),
            (DisplayHelpOnMissingArgumentOrSubcommand, ExitCode::Usage),
            (ArgumentConflict, ExitCode::Usage),
            (DisplayHelp, ExitCode::Ok),
            (DisplayVersion, ExitCode::Ok),
            (Io, ExitCode::Io),
            (Format, ExitCode::Io),
        ];
        for (kind, expected) in cases {
            assert_eq!(exit_code_from_error_kind(kind), expected);
        }
    }
}
