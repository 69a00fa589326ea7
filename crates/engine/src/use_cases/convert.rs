//! The batch conversion pipeline.
//!
//! Processes monster identifiers strictly one at a time: fetch the source
//! record, upsert the monster document, append spawn lines, append skill
//! lines. Fetch failures are recorded in the run summary and skip all
//! three outputs for that identifier; output I/O failures abort the run.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use mobforge_domain::{
    build_monster_entry, build_skill_line, build_spawn_line, normalize_db_name, to_trimmed_string,
    SourceMonster,
};

use crate::infrastructure::catalog::YamlItemCatalog;
use crate::infrastructure::config::Settings;
use crate::infrastructure::document::MonsterDb;
use crate::infrastructure::flatfile::{append_line, init_file};
use crate::infrastructure::ports::MonsterFetcher;

/// Outcome of one batch run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub requested: usize,
    /// Identifiers whose fetch failed; their outputs were skipped.
    pub not_found: Vec<i64>,
}

impl RunSummary {
    pub fn created(&self) -> usize {
        self.requested.saturating_sub(self.not_found.len())
    }
}

/// Drives the full conversion for a list of monster identifiers.
pub struct ConvertService {
    fetcher: Arc<dyn MonsterFetcher>,
    catalog: YamlItemCatalog,
    mob_db: MonsterDb,
    spawns_path: PathBuf,
    skills_path: PathBuf,
    mvp_damage_taken: i64,
}

impl ConvertService {
    pub fn new(settings: &Settings, fetcher: Arc<dyn MonsterFetcher>) -> Self {
        Self {
            fetcher,
            catalog: YamlItemCatalog::new(settings.item_db_paths.clone()),
            mob_db: MonsterDb::new(settings.output.mob_db.clone()),
            spawns_path: settings.output.spawns.clone(),
            skills_path: settings.output.skills.clone(),
            mvp_damage_taken: settings.mvp_damage_taken,
        }
    }

    /// Runs the batch: resets the three output artifacts, then converts
    /// each identifier in call order.
    pub async fn run(&mut self, monster_ids: &[i64]) -> Result<RunSummary> {
        self.mob_db.init().await?;
        init_file(&self.spawns_path).await?;
        init_file(&self.skills_path).await?;

        let mut summary = RunSummary {
            requested: monster_ids.len(),
            not_found: Vec::new(),
        };

        for &monster_id in monster_ids {
            match self.fetcher.fetch(monster_id).await {
                Ok(source) => {
                    self.generate_monster(monster_id, &source).await?;
                    self.generate_spawns(monster_id, &source).await?;
                    self.generate_skills(monster_id, &source).await?;
                }
                Err(e) => {
                    tracing::warn!(monster_id, error = %e, "failed to fetch monster");
                    summary.not_found.push(monster_id);
                }
            }
        }

        Ok(summary)
    }

    async fn generate_monster(&mut self, monster_id: i64, source: &SourceMonster) -> Result<()> {
        match build_monster_entry(source, self.mvp_damage_taken, &mut self.catalog) {
            Some(entry) => {
                let updated = self.mob_db.upsert(&entry).await?;
                tracing::debug!(monster_id, updated, "stored monster record");
            }
            None => {
                tracing::warn!(monster_id, "monster produced an empty record, skipping");
            }
        }
        Ok(())
    }

    async fn generate_spawns(&self, monster_id: i64, source: &SourceMonster) -> Result<()> {
        let spawns = source.spawns();
        if spawns.is_empty() {
            return Ok(());
        }

        let name = normalize_db_name(&to_trimmed_string(Some(&source.dbname)));
        let default_amount = json!(50);
        let default_delay = json!(5000);

        for spawn in spawns {
            // Divine-Pride carries no spawn coordinates
            let line = build_spawn_line(
                spawn.get("mapname"),
                None,
                None,
                &name,
                monster_id,
                spawn.get("amount").or(Some(&default_amount)),
                spawn.get("respawnTime").or(Some(&default_delay)),
            );
            append_line(&self.spawns_path, &line).await?;
        }

        Ok(())
    }

    async fn generate_skills(&self, monster_id: i64, source: &SourceMonster) -> Result<()> {
        let skills = source.skills();
        if skills.is_empty() {
            return Ok(());
        }

        let name = normalize_db_name(&to_trimmed_string(Some(&source.dbname)));

        for skill in skills {
            if !skill.is_object() {
                tracing::warn!(monster_id, "skipping malformed skill entry");
                continue;
            }
            let line = build_skill_line(monster_id, &name, skill);
            append_line(&self.skills_path, &line).await?;
        }

        Ok(())
    }
}
