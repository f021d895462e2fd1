macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod utils {
    define_strings! {
        VERBOSE =
            "Increase logging verbosity. Repeat for more detail (-v info, \
            -vv debug, -vvv trace). RUST_LOG overrides this when set.";
        PROGRESS =
            "Display a progress bar.";
    }
}

pub mod render {
    define_strings! {
        INPUT =
            "Path to the patient JSON report.";
        CAPTION =
            "Caption shown under the title. Can be repeated; one of the \
            given captions is picked using the seed.";
        SEED =
            "Seed for picking the caption. A random seed is drawn when \
            omitted.";
        JSON =
            "Print the document and the significant genes as JSON instead \
            of text.";
        BAR_WIDTH =
            "Width of the longest bar in the behavioral chart, in \
            characters.";
    }
}

pub mod significant {
    define_strings! {
        INPUT =
            "Path to the patient JSON report.";
        FORMAT =
            "Output format.";
        RISK_ALLELE =
            "Genotype character that marks a record as significant.";
        UNMETHYLATED =
            "Methylation status meaning \"not detected\". Any other value \
            marks a record as significant.";
    }
}

pub mod validate {
    define_strings! {
        FILES =
            "Paths to patient JSON reports. Wildcards are expanded.";
    }
}

pub mod messages {
    define_strings! {
        TITLE =
            "Personalized Genomic & Behavioral Report";
        LOAD_FAILURE =
            "There was a problem reading the file. Please upload a valid JSON.";
        NO_SIGNIFICANT =
            "No clinically significant variants detected.";
        NOT_AVAILABLE =
            "n/a";
    }
}
