use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::args::GeneratorArgs;

impl<C> GeneratorArgs<C> {
    /// Registers one option per configuration field on `command`, each with
    /// the field's current value as its default.
    ///
    /// Pure: no parsing happens here. Pair with
    /// [`apply_matches`](GeneratorArgs::apply_matches) after the caller has
    /// parsed its argument vector.
    pub fn add_flags(&self, command: Command) -> Command {
        let mut input_dirs = Arg::new("input-dirs")
            .short('i')
            .long("input-dirs")
            .value_name("DIRS")
            .value_delimiter(',')
            .action(ArgAction::Append)
            .help("Comma-separated list of import paths to get input types from.");
        if !self.input_dirs.is_empty() {
            input_dirs = input_dirs.default_values(self.input_dirs.clone());
        }

        command
            .arg(input_dirs)
            .arg(
                Arg::new("output-base")
                    .short('o')
                    .long("output-base")
                    .value_name("DIR")
                    .value_parser(value_parser!(PathBuf))
                    .default_value(self.output_base.clone().into_os_string())
                    .help("Output base; defaults to $GENTOOL_PATH/src or ./ if unset."),
            )
            .arg(
                Arg::new("output-package")
                    .short('p')
                    .long("output-package")
                    .value_name("PKG")
                    .default_value(self.output_package_path.clone())
                    .help("Base package path."),
            )
            .arg(
                Arg::new("output-file-base")
                    .short('O')
                    .long("output-file-base")
                    .value_name("NAME")
                    .default_value(self.output_file_base_name.clone())
                    .help("Base name (without extension) for output files."),
            )
            .arg(
                Arg::new("go-header-file")
                    .short('H')
                    .long("go-header-file")
                    .alias("header-file")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .default_value(self.header_file_path.clone().into_os_string())
                    .help(
                        "File containing boilerplate header text. The string YEAR will be \
                         replaced with the current 4-digit year.",
                    ),
            )
            .arg(
                Arg::new("verify-only")
                    .long("verify-only")
                    .action(ArgAction::SetTrue)
                    .help("If true, only verify existing output, do not write anything."),
            )
            .arg(
                Arg::new("build-tag")
                    .long("build-tag")
                    .value_name("TAG")
                    .default_value(self.generated_build_tag.clone())
                    .help(
                        "A build tag to use to identify files generated by this command. \
                         Should be unique.",
                    ),
            )
    }

    /// Copies parsed values back into the model. Options the caller did not
    /// register, or that have no default and were not provided, leave the
    /// model untouched.
    pub fn apply_matches(&mut self, matches: &ArgMatches) {
        if let Some(dirs) = matches.get_many::<String>("input-dirs") {
            self.input_dirs = dirs.cloned().collect();
        }
        if let Some(base) = matches.get_one::<PathBuf>("output-base") {
            self.output_base = base.clone();
        }
        if let Some(package) = matches.get_one::<String>("output-package") {
            self.output_package_path = package.clone();
        }
        if let Some(file_base) = matches.get_one::<String>("output-file-base") {
            self.output_file_base_name = file_base.clone();
        }
        if let Some(header) = matches.get_one::<PathBuf>("go-header-file") {
            self.header_file_path = header.clone();
        }
        if matches.get_flag("verify-only") {
            self.verify_only = true;
        }
        if let Some(tag) = matches.get_one::<String>("build-tag") {
            self.generated_build_tag = tag.clone();
        }
    }
}
