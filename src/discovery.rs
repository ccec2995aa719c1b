use anyhow::{Context, Result};

use crate::args::GeneratorArgs;

/// Marker suffix on an input specification requesting recursive discovery of
/// the whole subtree.
pub const RECURSIVE_SUFFIX: &str = "/...";

const VENDOR_PREFIX: &str = "./vendor/";

/// Package discovery as implemented by an external parser: walks directories
/// and produces a typed package graph. The driver only registers inputs; the
/// walk itself belongs to the implementation.
pub trait DiscoveryBuilder {
    fn set_include_test_files(&mut self, include: bool);
    /// Registers a build tag whose files are skipped during parsing.
    fn add_ignored_build_tag(&mut self, tag: &str);
    /// Registers a single directory package.
    fn add_dir(&mut self, path: &str) -> Result<()>;
    /// Registers a directory and everything below it.
    fn add_dir_recursive(&mut self, path: &str) -> Result<()>;
}

impl<C> GeneratorArgs<C> {
    /// Makes a fresh discovery builder populated with the input directories.
    ///
    /// Fail-fast: the first directory that cannot be registered aborts the
    /// whole resolution, wrapped with the offending path.
    pub fn new_builder<B: DiscoveryBuilder + Default>(&self) -> Result<B> {
        let mut builder = B::default();
        builder.set_include_test_files(self.include_test_files);
        // Ignore all auto-generated files.
        builder.add_ignored_build_tag(&self.generated_build_tag);

        for dir in &self.input_dirs {
            let result = match dir.strip_suffix(RECURSIVE_SUFFIX) {
                Some(root) => builder.add_dir_recursive(root),
                None => builder.add_dir(dir),
            };
            result.with_context(|| format!("unable to add directory {dir:?}"))?;
        }

        Ok(builder)
    }

    /// Reports whether `package_path` falls under one of the input roots.
    ///
    /// A trailing `...` marker and a leading `./vendor/` are stripped from
    /// each root before comparison. The comparison itself is a raw string
    /// prefix test, not segment-aware: the root `foo` matches `foobar` as
    /// well as `foo/bar`.
    pub fn input_includes(&self, package_path: &str) -> bool {
        self.input_dirs.iter().any(|dir| {
            let root = dir.strip_suffix("...").unwrap_or(dir);
            let root = root.strip_prefix(VENDOR_PREFIX).unwrap_or(root);
            package_path.starts_with(root)
        })
    }
}
