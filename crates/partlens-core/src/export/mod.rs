use std::path::{Path, PathBuf};

use crate::bundle::ComponentBundle;

/// Which of the bundle's text assets to save. All three are exported
/// verbatim; PartLens never rewrites collaborator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Footprint,
    Symbol,
    ModelScript,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Footprint => "Footprint (.kicad_mod)",
            ExportKind::Symbol => "Symbol (.kicad_sym)",
            ExportKind::ModelScript => "3D model script (.py)",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Footprint => "kicad_mod",
            ExportKind::Symbol => "kicad_sym",
            ExportKind::ModelScript => "py",
        }
    }

    pub fn blob<'a>(&self, bundle: &'a ComponentBundle) -> &'a str {
        match self {
            ExportKind::Footprint => &bundle.footprint_text,
            ExportKind::Symbol => &bundle.symbol_text,
            ExportKind::ModelScript => &bundle.model_script,
        }
    }
}

/// Default filename for an export, derived from the component name.
pub fn suggested_filename(bundle: &ComponentBundle, kind: ExportKind) -> PathBuf {
    let stem: String = bundle
        .display_name()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    PathBuf::from(format!("{}.{}", stem, kind.extension()))
}

pub fn write_blob(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)?;
    log::info!("Exported {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::demo_bundle;

    #[test]
    fn test_suggested_filename_sanitizes_name() {
        let mut bundle = demo_bundle();
        bundle.name = "LM358 (rev B)".to_string();
        let path = suggested_filename(&bundle, ExportKind::Footprint);
        assert_eq!(path, PathBuf::from("LM358__rev_B_.kicad_mod"));
    }

    #[test]
    fn test_blobs_are_verbatim() {
        let bundle = demo_bundle();
        assert_eq!(ExportKind::Footprint.blob(&bundle), bundle.footprint_text);
        assert_eq!(ExportKind::Symbol.blob(&bundle), bundle.symbol_text);
        assert_eq!(ExportKind::ModelScript.blob(&bundle), bundle.model_script);
    }

    #[test]
    fn test_write_blob_round_trip() {
        let dir = std::env::temp_dir().join("partlens_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("blob.kicad_mod");
        write_blob(&path, "(footprint \"X\")").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "(footprint \"X\")");
        std::fs::remove_file(&path).ok();
    }
}
