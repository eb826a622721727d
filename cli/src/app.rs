use anyhow::{Context, Result};
use filmpath_core::{CollaborationGraph, load_association_rows};
use std::path::PathBuf;

use crate::download;

pub struct FilmPathApp {
    pub catalogue_path: PathBuf,
}

impl FilmPathApp {
    pub fn new(catalogue: Option<PathBuf>) -> Result<Self> {
        let user_supplied = catalogue.is_some();
        let catalogue_path = download::resolve_catalogue_path(catalogue)?;

        if user_supplied {
            // An explicit path is never replaced by a download
            if !catalogue_path.exists() {
                anyhow::bail!("Catalogue does not exist: {}", catalogue_path.display());
            }
        } else {
            download::ensure_catalogue_downloaded(&catalogue_path)?;
        }

        Ok(Self { catalogue_path })
    }

    pub fn load_graph(&self) -> Result<CollaborationGraph> {
        let rows = load_association_rows(&self.catalogue_path)
            .with_context(|| format!("Could not read {}", self.catalogue_path.display()))?;
        let graph = CollaborationGraph::build(rows);

        if graph.is_empty() {
            anyhow::bail!(
                "No actors or directors found in {}",
                self.catalogue_path.display()
            );
        }
        Ok(graph)
    }
}
