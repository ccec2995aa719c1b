use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

/// Mapping from logical naming-system name to its implementation.
///
/// The driver never calls into the namers; the whole map is handed to the
/// context constructor, which owns deriving identifiers from types.
pub type NameSystems<N> = BTreeMap<String, N>;

/// The generation engine: holds parsed types and naming systems, invokes
/// per-package generators, and owns all output writing (including its own
/// atomicity guarantees).
pub trait GenerationContext: Sized {
    /// Discovery builder this context is constructed from.
    type Builder;
    /// Naming-system implementation carried in [`NameSystems`].
    type Namer;
    /// Unit of generation produced by the selection callback.
    type Package;

    fn new(
        builder: Self::Builder,
        name_systems: NameSystems<Self::Namer>,
        default_system: &str,
    ) -> Result<Self>;

    /// When set, generated output is checked against existing files and
    /// nothing is written.
    fn set_verify_only(&mut self, verify: bool);

    /// Runs the generators for `packages`, writing under `output_base`.
    fn execute_packages(
        &mut self,
        output_base: &Path,
        packages: Vec<Self::Package>,
    ) -> Result<()>;
}
