//! `typeshape extract` and `typeshape generate`

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use typeshape_extract::{
    ArtifactProbe, ArtifactWriter, ExtractOptions, Extractor, FsArtifactProbe, OutputFormat,
    Project, ProjectIndex,
};

/// Loaded model, options and source root
pub struct Inputs {
    pub project: Project,
    pub options: ExtractOptions,
    pub root: PathBuf,
}

impl Inputs {
    /// Read the project model and options.
    ///
    /// Relative source paths resolve against `root`, or the model's directory
    /// when no root is given.
    pub fn load(model: &Path, config: Option<&Path>, root: Option<PathBuf>) -> Result<Self> {
        let source = fs::read_to_string(model)
            .with_context(|| format!("Failed to read model {}", model.display()))?;
        let project: Project = serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse model {}", model.display()))?;

        let options = match config {
            Some(path) => ExtractOptions::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ExtractOptions::default(),
        };

        let root = root.unwrap_or_else(|| {
            model
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });

        Ok(Self {
            project,
            options,
            root,
        })
    }
}

/// Filesystem probe that resolves relative source paths against a root
struct RootedProbe<'a> {
    root: &'a Path,
    inner: FsArtifactProbe,
}

impl ArtifactProbe for RootedProbe<'_> {
    fn exists(&self, source_files: &[PathBuf]) -> bool {
        let rooted: Vec<PathBuf> = source_files.iter().map(|f| self.root.join(f)).collect();
        self.inner.exists(&rooted)
    }
}

/// Print descriptors for one unit, or every unit with a code model
pub fn extract(
    inputs: &Inputs,
    unit: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let index = ProjectIndex::build(&inputs.project).context("Inconsistent project model")?;
    let probe = RootedProbe {
        root: &inputs.root,
        inner: FsArtifactProbe::new(&inputs.options.artifact_extension),
    };
    let extractor = Extractor::new(&index, &probe, &inputs.options);

    if let Some(path) = unit {
        let Some(unit) = inputs.project.find_unit(path) else {
            bail!("No unit {} in the model", path.display());
        };
        match extractor.extract_type_model(unit)? {
            Some(types) => write!(out, "{}", format.render(&types)?)?,
            None => eprintln!("{}: no symbol model", path.display()),
        }
        return Ok(());
    }

    let results = extractor.extract_project(&inputs.project)?;
    match format {
        OutputFormat::Json => {
            let units: Vec<serde_json::Value> = results
                .iter()
                .map(|(path, types)| {
                    serde_json::json!({ "path": path, "types": types })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&units)?)?;
        }
        OutputFormat::Dts => {
            for (path, types) in &results {
                writeln!(out, "// {}", path.display())?;
                write!(out, "{}", format.render(types)?)?;
            }
        }
    }

    Ok(())
}

/// Regenerate every existing sibling artifact, returning how many were written.
///
/// Stops at the first artifact that cannot be written.
pub fn generate(inputs: &Inputs, out: &mut impl Write) -> Result<usize> {
    let index = ProjectIndex::build(&inputs.project).context("Inconsistent project model")?;
    let probe = RootedProbe {
        root: &inputs.root,
        inner: FsArtifactProbe::new(&inputs.options.artifact_extension),
    };
    let extractor = Extractor::new(&index, &probe, &inputs.options);
    let writer = ArtifactWriter::new(&inputs.options.artifact_extension);

    let mut written = 0;
    for (path, types) in extractor.extract_project(&inputs.project)? {
        let source = inputs.root.join(path);
        let wrote = writer
            .regenerate(&source, &types)
            .with_context(|| format!("Failed to regenerate artifact for {}", source.display()))?;
        if wrote {
            written += 1;
        }
    }

    info!(written, "generation complete");
    writeln!(out, "Regenerated {} artifact(s)", written)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use typeshape_extract::{
        artifact_path, ClassSymbol, CompilationUnit, EnumSymbol, FileCodeModel, PropertySymbol,
        TypeReference,
    };

    fn write_model(dir: &Path) -> PathBuf {
        let color = EnumSymbol::new("Color", "App.Color")
            .member("Red")
            .source_file("Color.cs");
        let car = ClassSymbol::new("Car", "App.Car")
            .property(PropertySymbol::new("Wheels", TypeReference::int()))
            .property(PropertySymbol::new(
                "Paint",
                TypeReference::code_type("App.Color"),
            ))
            .source_file("Car.cs");
        let project = Project::new()
            .unit(CompilationUnit::new(
                "Color.cs",
                FileCodeModel::new().element(color),
            ))
            .unit(CompilationUnit::new("Car.cs", FileCodeModel::new().element(car)))
            .unit(CompilationUnit::without_model("readme.txt"));

        let model = dir.join("project.json");
        fs::write(&model, serde_json::to_string(&project).unwrap()).unwrap();
        model
    }

    #[test]
    fn test_extract_single_unit() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let inputs = Inputs::load(&model, None, None).unwrap();

        let mut out = Vec::new();
        extract(&inputs, Some(Path::new("Car.cs")), OutputFormat::Dts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("interface Car {"));
        assert!(text.contains("        Wheels: number;\n"));
    }

    #[test]
    fn test_extract_unknown_unit() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let inputs = Inputs::load(&model, None, None).unwrap();

        let mut out = Vec::new();
        assert!(extract(&inputs, Some(Path::new("Nope.cs")), OutputFormat::Dts, &mut out).is_err());
    }

    #[test]
    fn test_extract_all_json() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let inputs = Inputs::load(&model, None, None).unwrap();

        let mut out = Vec::new();
        extract(&inputs, None, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let units = value.as_array().unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1]["path"], "Car.cs");
        assert_eq!(units[1]["types"][0]["name"], "Car");
    }

    #[test]
    fn test_generate_rewrites_existing_artifacts_only() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let color_dts = artifact_path(&dir.path().join("Color.cs"), ".d.ts");
        fs::write(&color_dts, "").unwrap();

        let inputs = Inputs::load(&model, None, None).unwrap();
        let mut out = Vec::new();
        assert_eq!(generate(&inputs, &mut out).unwrap(), 1);

        assert!(fs::read_to_string(&color_dts).unwrap().contains("enum Color {"));
        assert!(!artifact_path(&dir.path().join("Car.cs"), ".d.ts").exists());
        assert_eq!(String::from_utf8(out).unwrap(), "Regenerated 1 artifact(s)\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_fails_on_unwritable_artifact() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let color_dts = artifact_path(&dir.path().join("Color.cs"), ".d.ts");
        fs::write(&color_dts, "").unwrap();
        fs::set_permissions(&color_dts, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users can write regardless of mode bits
        if fs::OpenOptions::new().write(true).open(&color_dts).is_ok() {
            return;
        }

        let inputs = Inputs::load(&model, None, None).unwrap();
        let mut out = Vec::new();
        let err = generate(&inputs, &mut out).unwrap_err();
        assert!(err.to_string().contains("Failed to regenerate artifact"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_cross_reference_uses_root() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        fs::write(artifact_path(&dir.path().join("Color.cs"), ".d.ts"), "").unwrap();
        let inputs = Inputs::load(&model, None, None).unwrap();

        let mut out = Vec::new();
        extract(&inputs, Some(Path::new("Car.cs")), OutputFormat::Dts, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Paint: server.Color;"));
    }

    #[test]
    fn test_config_file() {
        let dir = tempdir().unwrap();
        let model = write_model(dir.path());
        let config = dir.path().join("typeshape.toml");
        fs::write(&config, "default_module = \"api\"\n").unwrap();

        let inputs = Inputs::load(&model, Some(&config), None).unwrap();
        let mut out = Vec::new();
        extract(&inputs, Some(Path::new("Car.cs")), OutputFormat::Dts, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("declare module api {"));
    }

    #[test]
    fn test_missing_model() {
        let dir = tempdir().unwrap();
        let err = Inputs::load(&dir.path().join("missing.json"), None, None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to read model"));
    }
}
