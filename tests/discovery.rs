use anyhow::{Result, bail};
use gentool::{DiscoveryBuilder, GeneratorArgs};

#[derive(Default)]
struct RecordingBuilder {
    include_test_files: Option<bool>,
    ignored_tags: Vec<String>,
    dirs: Vec<String>,
    recursive_dirs: Vec<String>,
}

impl DiscoveryBuilder for RecordingBuilder {
    fn set_include_test_files(&mut self, include: bool) {
        self.include_test_files = Some(include);
    }

    fn add_ignored_build_tag(&mut self, tag: &str) {
        self.ignored_tags.push(tag.to_string());
    }

    fn add_dir(&mut self, path: &str) -> Result<()> {
        self.dirs.push(path.to_string());
        Ok(())
    }

    fn add_dir_recursive(&mut self, path: &str) -> Result<()> {
        self.recursive_dirs.push(path.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FailingBuilder;

impl DiscoveryBuilder for FailingBuilder {
    fn set_include_test_files(&mut self, _include: bool) {}

    fn add_ignored_build_tag(&mut self, _tag: &str) {}

    fn add_dir(&mut self, path: &str) -> Result<()> {
        bail!("no such directory: {path}");
    }

    fn add_dir_recursive(&mut self, path: &str) -> Result<()> {
        bail!("no such directory: {path}");
    }
}

fn args_with_inputs(inputs: &[&str]) -> GeneratorArgs {
    let mut args: GeneratorArgs = GeneratorArgs::default();
    args.input_dirs = inputs.iter().map(|input| input.to_string()).collect();
    args
}

#[test]
fn recursive_marker_selects_recursive_discovery() {
    let args = args_with_inputs(&["pkg/apis/...", "pkg/util"]);

    let builder: RecordingBuilder = args.new_builder().unwrap();

    assert_eq!(builder.recursive_dirs, vec!["pkg/apis"]);
    assert_eq!(builder.dirs, vec!["pkg/util"]);
}

#[test]
fn builder_carries_test_flag_and_build_tag() {
    let mut args = args_with_inputs(&[]);
    args.include_test_files = true;
    args.generated_build_tag = "generated_by_packgen".to_string();

    let builder: RecordingBuilder = args.new_builder().unwrap();

    assert_eq!(builder.include_test_files, Some(true));
    assert_eq!(builder.ignored_tags, vec!["generated_by_packgen"]);
}

#[test]
fn bad_input_dir_aborts_with_offending_path() {
    let args = args_with_inputs(&["does/not/exist"]);

    let err = args.new_builder::<FailingBuilder>().unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("unable to add directory"), "{message}");
    assert!(message.contains("does/not/exist"), "{message}");
}

#[test]
fn input_includes_accepts_subpackages() {
    let args = args_with_inputs(&["a/b"]);

    assert!(args.input_includes("a/b"));
    assert!(args.input_includes("a/b/c"));
    assert!(!args.input_includes("x/a/b"));
}

#[test]
fn input_includes_is_prefix_only() {
    // Documented looseness: a raw prefix test, not segment-aware.
    let args = args_with_inputs(&["a/b"]);

    assert!(args.input_includes("a/bxyz"));
}

#[test]
fn input_includes_strips_recursive_marker() {
    let args = args_with_inputs(&["pkg/apis/..."]);

    assert!(args.input_includes("pkg/apis/example"));
    assert!(!args.input_includes("pkg/client"));
}

#[test]
fn input_includes_strips_vendor_prefix() {
    let args = args_with_inputs(&["./vendor/acme.dev/codec"]);

    assert!(args.input_includes("acme.dev/codec"));
    assert!(args.input_includes("acme.dev/codec/json"));
}

#[test]
fn input_includes_rejects_when_no_root_matches() {
    let args = args_with_inputs(&["pkg/apis", "pkg/util"]);

    assert!(!args.input_includes("cmd/packgen"));
}
