use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Build tag stamped onto generated files; discovery skips files carrying it
/// so generator output is never re-parsed as input.
pub const DEFAULT_BUILD_TAG: &str = "ignore_autogenerated";

const DEFAULT_GENERATED_BY_TEMPLATE: &str = "// Code generated by GENERATOR_NAME. Do NOT EDIT.";

/// Configuration for one generation run.
///
/// Created with defaults, optionally updated from command-line flags, then
/// consumed exactly once by [`execute`](GeneratorArgs::execute). Fields are
/// not validated up front; a bad path surfaces when it is used.
#[derive(Debug, Clone)]
pub struct GeneratorArgs<C = ()> {
    /// Which directories to parse. A trailing `/...` requests the whole
    /// subtree.
    pub input_dirs: Vec<String>,
    /// Source tree to write results to.
    pub output_base: PathBuf,
    /// Package path within the output base.
    pub output_package_path: String,
    /// Base name for output files.
    pub output_file_base_name: String,
    /// Where to get copyright header text.
    pub header_file_path: PathBuf,
    /// When non-empty, a "Code generated by" comment appended below the
    /// boilerplate. `GENERATOR_NAME` is replaced with the generator's name.
    pub generated_by_comment_template: String,
    /// Only verify existing output, write nothing.
    pub verify_only: bool,
    /// Include test sources when parsing input directories.
    pub include_test_files: bool,
    /// Tag identifying files generated by this run. Each generator should use
    /// a distinct tag.
    pub generated_build_tag: String,
    /// Caller-defined payload threaded through to the selection callback.
    pub custom_args: C,
    pub(crate) default_flag_parsing: bool,
}

impl<C: Default> Default for GeneratorArgs<C> {
    fn default() -> Self {
        let source_tree = default_source_tree();
        GeneratorArgs {
            input_dirs: Vec::new(),
            output_base: source_tree.clone(),
            output_package_path: String::new(),
            output_file_base_name: String::new(),
            header_file_path: source_tree.join("gentool/boilerplate/boilerplate.txt"),
            generated_by_comment_template: DEFAULT_GENERATED_BY_TEMPLATE.to_string(),
            verify_only: false,
            include_test_files: false,
            generated_build_tag: DEFAULT_BUILD_TAG.to_string(),
            custom_args: C::default(),
            default_flag_parsing: true,
        }
    }
}

impl<C> GeneratorArgs<C> {
    /// Disables implicit flag registration and parsing inside
    /// [`execute`](GeneratorArgs::execute); the caller owns populating the
    /// model instead.
    pub fn without_default_flag_parsing(mut self) -> Self {
        self.default_flag_parsing = false;
        self
    }

    /// Replaces the custom payload, preserving every other field.
    pub fn with_custom_args<D>(self, custom_args: D) -> GeneratorArgs<D> {
        GeneratorArgs {
            input_dirs: self.input_dirs,
            output_base: self.output_base,
            output_package_path: self.output_package_path,
            output_file_base_name: self.output_file_base_name,
            header_file_path: self.header_file_path,
            generated_by_comment_template: self.generated_by_comment_template,
            verify_only: self.verify_only,
            include_test_files: self.include_test_files,
            generated_build_tag: self.generated_build_tag,
            custom_args,
            default_flag_parsing: self.default_flag_parsing,
        }
    }
}

/// Returns the `src` directory of the first entry in `GENTOOL_PATH`, or `./`
/// when the variable is unset or its first entry is empty. Useful as a
/// default output location. Re-reads the environment on every call.
pub fn default_source_tree() -> PathBuf {
    source_tree_from(env::var_os("GENTOOL_PATH"))
}

/// Environment-independent core of [`default_source_tree`]: `search_path` is
/// a platform path list, as stored in `GENTOOL_PATH`.
pub fn source_tree_from(search_path: Option<OsString>) -> PathBuf {
    let Some(search_path) = search_path else {
        return PathBuf::from("./");
    };
    match env::split_paths(&search_path).next() {
        Some(first) if !first.as_os_str().is_empty() => first.join("src"),
        _ => PathBuf::from("./"),
    }
}

/// Base name of the first process argument, falling back to the crate name
/// when the argument vector is empty. This is the one place ambient process
/// state is consulted; everything downstream takes the name as a parameter.
pub fn invoking_program_name() -> String {
    env::args_os()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
