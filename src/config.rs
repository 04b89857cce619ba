//! Compiler configuration shared by the driver and the analysis phases.

/// The phase after which the driver stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseOption {
    /// Print the token stream
    Tokens,
    /// Parse only
    Parse,
    /// Build symbol tables and print each procedure's table
    Tables,
    /// Run semantic analysis and report success
    Semant,
    #[default]
    All,
}

/// Which library procedures are predefined in the global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Library {
    /// Console and process procedures
    Standard,
    /// Standard procedures plus the drawing procedures
    #[default]
    Graphics,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
    pub phase: PhaseOption,
    pub library: Library,
}

impl CompilerOptions {
    pub fn new(phase: PhaseOption, library: Library) -> Self {
        CompilerOptions { phase, library }
    }

    /// Whether the table builder dumps each procedure's table.
    pub fn dump_tables(&self) -> bool {
        self.phase == PhaseOption::Tables
    }
}
