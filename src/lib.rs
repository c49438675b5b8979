//! Discforge generates a Minecraft datapack and resourcepack pair that add
//! custom music discs, driven from a user-supplied disc manifest. File
//! templates are expanded by a small substitution engine with recursive
//! formatting over structured content bodies.

/// Zip archive packaging for generated packs
pub mod archive;

/// Static datapack and resourcepack file catalogs
pub mod catalog;

/// Command-line interface module for the discforge application
pub mod cli;

/// Manifest loading and resolved generation settings
/// Supports JSON and YAML formats (discs.json, discs.yml, discs.yaml)
pub mod config;

/// Common constants shared across modules
pub mod constants;

/// Structured content bodies and the recursive content formatter
pub mod content;

/// Substitution context with dotted-path placeholder lookup
pub mod context;

/// Disc entries and the ordered entry list
pub mod entry;

/// Error types and handling for the discforge application
pub mod error;

/// Pack assembly orchestration
/// Combines the catalogs, processor and non-template steps into full packs
pub mod generator;

/// Logger configuration
pub mod logger;

/// Repetition driver and pack file writer
pub mod processor;

/// Placeholder substitution for template strings and path templates
pub mod render;

/// Pack file template descriptors
pub mod template;
