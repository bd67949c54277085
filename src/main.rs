use clap::Parser;
use std::path::PathBuf;
use versync::paths::SyncPaths;
use versync::{collect, output, patch, version};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "versync")]
#[command(about = "Sync versioned docs into a VitePress nav dropdown")]
#[command(long_about = "\
Sync versioned docs into a VitePress nav dropdown

Your filesystem is the data source. Every versions/<name>/README.md is a
published snapshot: it is copied to docs/versions/<name>/index.md and the
'Versionen' dropdown in docs/.vitepress/config.mts is rewritten to list
all snapshots, newest first.

Repository layout:

  repo/
  ├── versions/
  │   ├── v1.0.1/README.md         # Snapshot (dir + README = published)
  │   ├── v1.1.0-rc.1/README.md
  │   └── scratch/                 # No README.md = ignored
  └── docs/
      ├── .vitepress/config.mts    # nav: [...] rewritten in place
      └── versions/                # Staged copies land here

Output is byte-deterministic: a second run over unchanged inputs writes
nothing, so CI diffs stay clean. Missing inputs (no versions/, no config)
are warnings, not failures.")]
#[command(version = version_string())]
struct Cli {
    /// Repository root containing versions/ and docs/
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Override the snapshot directory (default: <repo-root>/versions)
    #[arg(long)]
    versions_dir: Option<PathBuf>,

    /// Override the staging directory (default: <repo-root>/docs/versions)
    #[arg(long)]
    docs_versions_dir: Option<PathBuf>,

    /// Override the VitePress config path
    /// (default: <repo-root>/docs/.vitepress/config.mts)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut paths = SyncPaths::from_repo_root(&cli.repo_root);
    if let Some(dir) = cli.versions_dir {
        paths.versions_dir = dir;
    }
    if let Some(dir) = cli.docs_versions_dir {
        paths.docs_versions_dir = dir;
    }
    if let Some(config) = cli.config {
        paths.nav_config = config;
    }

    let scan = collect::collect_versions(&paths.versions_dir, &paths.docs_versions_dir)?;
    output::print_collect_warning(&scan, &paths.versions_dir);

    let mut versions = scan.into_versions();
    version::sort_versions_desc(&mut versions);

    let update = patch::update_nav_config(&paths.nav_config, &versions)?;
    output::print_nav_warning(update, &paths.nav_config);

    output::print_sync_summary(&versions);
    Ok(())
}
