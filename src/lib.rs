//! # versync
//!
//! Sync published documentation snapshots into a VitePress site. Your
//! filesystem is the data source: every `versions/<name>/README.md`
//! becomes `docs/versions/<name>/index.md`, and the site's nav gains a
//! "Versionen" dropdown listing all snapshots, newest first.
//!
//! # Architecture: One Sequential Pass
//!
//! ```text
//! 1. Collect   versions/         →  staged copies + identifier list
//! 2. Order     identifiers       →  newest-first (loose semver, string fallback)
//! 3. Locate    config.mts        →  nav array span + existing entry range
//! 4. Patch     rendered dropdown →  config.mts (only if bytes changed)
//! ```
//!
//! The config rewrite is the interesting part: VitePress config is a
//! TypeScript module, and we deliberately do **not** parse it. A small
//! lexical scanner — a finite-state machine that knows about strings and
//! comments — finds the balanced bracket spans we need, and the patch
//! replaces or inserts exactly one object literal. Output is
//! byte-deterministic: running twice over unchanged inputs produces zero
//! diff, which keeps CI commits clean.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | discovers `versions/<name>/README.md` snapshots and stages them into the docs tree |
//! | [`version`] | loose semver parsing and the newest-first comparator |
//! | [`lexical`] | bracket matching FSM aware of string/comment contexts |
//! | [`locate`] | finds the `nav:` array span and an existing dropdown entry |
//! | [`nav`] | renders the dropdown block with encodeURI-escaped links |
//! | [`patch`] | replace-or-insert into the nav array, write-if-changed |
//! | [`paths`] | explicit path wiring from the repository root |
//! | [`output`] | summary and warning formatting |
//!
//! # Error Policy
//!
//! Missing optional inputs (no `versions/` root, no config file, no
//! locatable nav array) warn and skip; the run still succeeds. Real I/O
//! failures abort with context. Structural near-misses inside the config
//! (a label match without an enclosing object) degrade to insertion
//! rather than corrupting the file.

pub mod collect;
pub mod lexical;
pub mod locate;
pub mod nav;
pub mod output;
pub mod patch;
pub mod paths;
pub mod version;
