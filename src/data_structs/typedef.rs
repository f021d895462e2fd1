/// Identifier of a gene as it appears in the `Gene` column.
pub type GeneId = String;
/// Numeric value of a behavioral trait score.
pub type ScoreType = f64;

/// Name of the gene identifier column.
pub const GENE_COL: &str = "Gene";
/// Name of the genotype column.
pub const GENOTYPE_COL: &str = "Genotype";
/// Name of the methylation status column.
pub const METHYLATION_COL: &str = "Methylation_Status";

/// Columns every genomic table starts with, in display order.
pub const GENOMIC_COLUMNS: [&str; 3] = [GENE_COL, GENOTYPE_COL, METHYLATION_COL];
