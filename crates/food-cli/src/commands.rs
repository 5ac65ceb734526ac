use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span};

use food_core::{BuildContext, BuildProfile, DatabaseStats, build_sources, merge_into_document};
use food_ingest::{
    DEFAULT_MANIFEST_NAME, DatabaseDocument, DocumentLayout, SourceManifest, StoredFood,
    default_manifest, load_database, load_manifest, save_database,
};
use food_model::SourceKind;

use crate::cli::{BuildArgs, StatsArgs};
use crate::types::RunResult;

/// Database file name used when neither a manifest nor `--database` names one.
pub const DEFAULT_DATABASE_NAME: &str = "foodDatabase.json";

/// Id counter start for the quick generator's Healthy Eating batch.
pub const QUICK_HEALTHY_EATING_OFFSET: u32 = 4000;

pub fn run_migrate(args: &BuildArgs) -> Result<RunResult> {
    run_build(BuildProfile::Migration, args)
}

pub fn run_generate(args: &BuildArgs) -> Result<RunResult> {
    run_build(BuildProfile::Quick, args)
}

pub fn run_stats(args: &StatsArgs) -> Result<DatabaseStats> {
    if !args.database.exists() {
        bail!("database not found: {}", args.database.display());
    }
    let document = load_database(&args.database, DocumentLayout::Wrapped)
        .with_context(|| format!("load database {}", args.database.display()))?;
    Ok(DatabaseStats::from_stored(document.foods()))
}

fn run_build(profile: BuildProfile, args: &BuildArgs) -> Result<RunResult> {
    let span = info_span!("build", profile = %profile);
    let _guard = span.enter();

    let mut manifest = resolve_manifest(profile, args)?;
    if let Some(path) = &args.database {
        manifest.database.path = path.clone();
    }
    let database_path = manifest.database.path.clone();
    let verified_on = args
        .verified_on
        .or(manifest.database.verified_on)
        .unwrap_or_else(|| Local::now().date_naive());

    let mut document = match profile {
        BuildProfile::Migration => load_database(&database_path, profile.default_layout())
            .with_context(|| format!("load database {}", database_path.display()))?,
        BuildProfile::Quick => DatabaseDocument::empty(profile.default_layout()),
    };
    info!(
        database = %database_path.display(),
        existing = document.foods().len(),
        sources = manifest.sources.len(),
        "starting build"
    );

    let mut ctx = BuildContext::new(profile, verified_on).with_first_id(first_id(profile, args));
    ctx.reserve_existing_ids(document.foods().iter().filter_map(StoredFood::id));

    let output = build_sources(&manifest.sources, &mut ctx);
    let merge = merge_into_document(&mut document, &output.records, verified_on)
        .context("merge records into database")?;
    let stats = DatabaseStats::from_stored(document.foods());

    let bytes_written = if args.dry_run {
        info!("dry run, database not written");
        None
    } else {
        let bytes = save_database(&database_path, &document)
            .with_context(|| format!("write database {}", database_path.display()))?;
        Some(bytes)
    };

    Ok(RunResult {
        profile,
        database_path,
        has_errors: output.has_failures(),
        sources: output.sources,
        merge,
        stats,
        bytes_written,
    })
}

fn first_id(profile: BuildProfile, args: &BuildArgs) -> u32 {
    args.first_id.unwrap_or(match profile {
        BuildProfile::Migration => 1,
        BuildProfile::Quick => 0,
    })
}

/// Explicit manifest, then `<DATA_DIR>/food-sources.toml`, then the
/// well-known exports in the data directory.
fn resolve_manifest(profile: BuildProfile, args: &BuildArgs) -> Result<SourceManifest> {
    if let Some(path) = &args.manifest {
        return load_manifest(path).with_context(|| format!("load manifest {}", path.display()));
    }
    let discovered = args.data_dir.join(DEFAULT_MANIFEST_NAME);
    if discovered.is_file() {
        return load_manifest(&discovered)
            .with_context(|| format!("load manifest {}", discovered.display()));
    }
    Ok(builtin_manifest(profile, &args.data_dir, first_id(profile, args)))
}

fn builtin_manifest(profile: BuildProfile, data_dir: &Path, first_id: u32) -> SourceManifest {
    let database = data_dir.join(DEFAULT_DATABASE_NAME);
    let mut manifest = default_manifest(data_dir, &database, first_id);
    if profile == BuildProfile::Quick {
        for source in &mut manifest.sources {
            if source.kind == SourceKind::HealthyEating {
                source.id_offset = Some(QUICK_HEALTHY_EATING_OFFSET);
            }
        }
    }
    manifest
}
