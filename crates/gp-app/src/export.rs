use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gp_core::config::{ExportConfig, load_config};
use gp_core::error::CoreError;
use gp_core::frame::AsciiGrid;
use gp_export::{OutputTarget, export_html};

use crate::cli::Cli;

/// Resolve config: `--config` file (or defaults) then CLI overrides.
///
/// # Errors
/// Returns an error if an existing config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<ExportConfig> {
    let mut config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        ExportConfig::default()
    };

    if let Some(colored) = cli.colored_override() {
        config.colored = colored;
    }
    if let Some(bg) = cli.save_bg {
        config.background = bg;
    }
    if let Some(ref dir) = cli.save_html {
        config.output_dir.clone_from(dir);
    }
    if cli.only_save {
        config.report = true;
    }
    Ok(config)
}

/// Lit une grille JSON produite par le convertisseur.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not a valid grid.
pub fn load_grid(path: &Path) -> Result<AsciiGrid> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let grid: AsciiGrid = serde_json::from_str(&content)
        .with_context(|| format!("Grille JSON invalide dans {}", path.display()))?;
    log::debug!(
        "Grille chargée : {} lignes, {} cellules",
        grid.row_count(),
        grid.cell_count()
    );
    Ok(grid)
}

/// Charge la grille et écrit l'export HTML. Retourne le chemin écrit.
///
/// # Errors
/// Returns an error if the source is ambiguous, the grid cannot be loaded,
/// or the export fails.
pub fn run(cli: &Cli, config: &ExportConfig) -> Result<PathBuf> {
    let source = cli.source()?;
    let grid = load_grid(&cli.grid)?;
    let target = OutputTarget::new(config.output_dir.clone(), source, config.report);
    let path = export_html(&grid, config.colored, &target, config.background)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gp_core::color::BackgroundColor;
    use gp_export::ExportError;

    const GRID: &str = r##"{"rows":[[{"glyph":"#","fg":[255,0,0]},{"glyph":".","fg":[0,0,0]}]]}"##;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["glyphpage"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn overrides_apply_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("c.toml");
        std::fs::write(&cfg, "[export]\ncolored = true\nbackground = [1, 1, 1, 1]\n").unwrap();
        let cfg = cfg.to_string_lossy().into_owned();
        let c = cli(&["--grid", "g.json", "-c", cfg.as_str(), "--no-color", "--save-html", "out"]);
        let config = resolve_config(&c).unwrap();
        assert!(!config.colored);
        assert_eq!(config.background, BackgroundColor::new(1, 1, 1, 1));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(!config.report);
    }

    #[test]
    fn only_save_enables_report() {
        let c = cli(&["--grid", "g.json", "-c", "does/not/exist.toml", "--only-save"]);
        assert!(resolve_config(&c).unwrap().report);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let c = cli(&["--grid", "g.json", "-c", "does/not/exist.toml"]);
        assert_eq!(resolve_config(&c).unwrap(), ExportConfig::default());
    }

    #[test]
    fn end_to_end_export() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("grid.json");
        std::fs::write(&grid, GRID).unwrap();
        let out = dir.path().to_string_lossy().into_owned();
        let grid_arg = grid.to_string_lossy().into_owned();
        let c = cli(&[
            "--grid", grid_arg.as_str(), "--url", "https://x.org/p/cat.jpg", "--save-html", out.as_str(),
            "-c", "does/not/exist.toml",
        ]);
        let config = resolve_config(&c).unwrap();
        let path = run(&c, &config).unwrap();
        assert_eq!(path, dir.path().join("cat-jpg-ascii-art.html"));
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("<span style=\"color:rgb(255,0,0)\">#</span>"));
    }

    #[test]
    fn missing_destination_surfaces_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("grid.json");
        std::fs::write(&grid, GRID).unwrap();
        let grid_arg = grid.to_string_lossy().into_owned();
        let out = dir.path().join("nope").to_string_lossy().into_owned();
        let c = cli(&[
            "--grid", grid_arg.as_str(), "--image", "cat.png", "--save-html", out.as_str(),
            "-c", "does/not/exist.toml",
        ]);
        let config = resolve_config(&c).unwrap();
        let err = run(&c, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::DestinationNotFound { .. })
        ));
    }

    #[test]
    fn missing_grid_is_file_not_found() {
        let err = load_grid(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }
}
