// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use super::consts::*;

/// Age/gender category (`spol`). Wire codes are used verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Gender {
    #[value(name = "MA")] Ma,
    #[value(name = "MC")] Mc,
    #[value(name = "MM")] Mm,
    #[value(name = "MK")] Mk,
    #[value(name = "MD")] Md,
    #[value(name = "MM_D")] MmD,
    #[value(name = "ZA")] Za,
    #[value(name = "ZC")] Zc,
    #[value(name = "ZM")] Zm,
    #[value(name = "ZK")] Zk,
    #[value(name = "ZD")] Zd,
    #[value(name = "ZM_D")] ZmD,
}

impl Gender {
    pub fn code(self) -> &'static str {
        use Gender::*;
        match self {
            Ma => "MA", Mc => "MC", Mm => "MM", Mk => "MK", Md => "MD", MmD => "MM_D",
            Za => "ZA", Zc => "ZC", Zm => "ZM", Zk => "ZK", Zd => "ZD", ZmD => "ZM_D",
        }
    }
}

/// Event (`disc`): distance × stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Course {
    #[value(name = "50K")] K50,
    #[value(name = "100K")] K100,
    #[value(name = "200K")] K200,
    #[value(name = "50D")] D50,
    #[value(name = "100D")] D100,
    #[value(name = "200D")] D200,
    #[value(name = "50P")] P50,
    #[value(name = "100P")] P100,
    #[value(name = "200P")] P200,
    #[value(name = "50H")] H50,
    #[value(name = "100H")] H100,
    #[value(name = "200H")] H200,
    #[value(name = "50M")] M50,
    #[value(name = "100M")] M100,
    #[value(name = "200M")] M200,
}

impl Course {
    pub fn code(self) -> &'static str {
        use Course::*;
        match self {
            K50 => "50K", K100 => "100K", K200 => "200K",
            D50 => "50D", D100 => "100D", D200 => "200D",
            P50 => "50P", P100 => "100P", P200 => "200P",
            H50 => "50H", H100 => "100H", H200 => "200H",
            M50 => "50M", M100 => "100M", M200 => "200M",
        }
    }
}

/// Pool length (`bazen`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Pool {
    /// 25 m
    #[value(name = "Z")] Short,
    /// 50 m
    #[value(name = "L")] Long,
}

impl Pool {
    pub fn code(self) -> &'static str {
        match self { Pool::Short => "Z", Pool::Long => "L" }
    }
}

/// One fully typed query against the rankings report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryParams {
    pub results: u32,
    pub gender: Gender,
    pub course: Course,
    pub pool: Pool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            results: DEFAULT_RESULTS,
            gender: Gender::Mm,
            course: Course::D50,
            pool: Pool::Long,
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} (top {})",
            self.gender.code(), self.course.code(), self.pool.code(), self.results)
    }
}

/// A named source of one run. The name becomes the output column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub pool: Pool,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, pool: Pool) -> Self {
        Self { name: name.into(), pool }
    }
}

/// Which field of a record a source contributes to the combined row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ResolveField {
    /// Time as shown on the site, e.g. `1:02,50`
    #[default]
    Time,
    /// Time in seconds, e.g. `62.5`
    Seconds,
    Age,
    Id,
}

/// Record field that identifies "the same swimmer" across sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum JoinField {
    /// Display name (`swimmer_name`)
    #[default]
    Name,
    /// Profile link (`swimmer_id`)
    Id,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file: s!(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub gender: Gender,
    pub course: Course,
    pub results: u32,
    pub sources: Vec<SourceSpec>,
    pub join: JoinField,
    pub resolve: ResolveField,
    pub sequential: bool,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            gender: Gender::Mm,
            course: Course::D50,
            results: DEFAULT_RESULTS,
            sources: vec![
                SourceSpec::new("longPool", Pool::Long),
                SourceSpec::new("shortPool", Pool::Short),
            ],
            join: JoinField::Name,
            resolve: ResolveField::Time,
            sequential: false,
            export: ExportOptions::default(),
        }
    }
}

impl RunOptions {
    pub fn params_for(&self, source: &SourceSpec) -> QueryParams {
        QueryParams {
            results: self.results,
            gender: self.gender,
            course: self.course,
            pool: source.pool,
        }
    }
}
