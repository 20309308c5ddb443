use std::fmt;
use std::str::FromStr;

use crate::error::IdeogramError;

/// One row of a genome build: chromosome id, total length and centromere
/// position, both in base pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromosomeRef {
    pub id: &'static str,
    pub total_length_bp: u64,
    pub centromere_bp: u64,
}

const fn chrom(id: &'static str, total_length_bp: u64, centromere_bp: u64) -> ChromosomeRef {
    ChromosomeRef {
        id,
        total_length_bp,
        centromere_bp,
    }
}

const HG19: [ChromosomeRef; 24] = [
    chrom("1", 249_250_621, 125_000_000),
    chrom("2", 243_199_373, 93_300_000),
    chrom("3", 198_022_430, 91_000_000),
    chrom("4", 191_154_276, 50_400_000),
    chrom("5", 180_915_260, 48_400_000),
    chrom("6", 171_115_067, 61_000_000),
    chrom("7", 159_138_663, 59_900_000),
    chrom("8", 146_364_022, 45_600_000),
    chrom("9", 141_213_431, 49_000_000),
    chrom("10", 135_534_747, 40_200_000),
    chrom("11", 135_006_516, 53_700_000),
    chrom("12", 133_851_895, 35_800_000),
    chrom("13", 115_169_878, 17_900_000),
    chrom("14", 107_349_540, 17_600_000),
    chrom("15", 102_531_392, 19_000_000),
    chrom("16", 90_354_753, 36_600_000),
    chrom("17", 81_195_210, 24_000_000),
    chrom("18", 78_077_248, 17_200_000),
    chrom("19", 59_128_983, 26_500_000),
    chrom("20", 63_025_520, 27_500_000),
    chrom("21", 48_129_895, 13_200_000),
    chrom("22", 51_304_566, 14_700_000),
    chrom("X", 155_270_560, 60_600_000),
    chrom("Y", 59_373_566, 12_500_000),
];

const HG38: [ChromosomeRef; 24] = [
    chrom("1", 248_956_422, 123_400_000),
    chrom("2", 242_193_529, 93_900_000),
    chrom("3", 198_295_559, 90_900_000),
    chrom("4", 190_214_555, 50_000_000),
    chrom("5", 181_538_259, 48_800_000),
    chrom("6", 170_805_979, 59_800_000),
    chrom("7", 159_345_973, 60_100_000),
    chrom("8", 145_138_636, 45_200_000),
    chrom("9", 138_394_717, 43_000_000),
    chrom("10", 133_797_422, 39_800_000),
    chrom("11", 135_086_622, 53_400_000),
    chrom("12", 133_275_309, 35_500_000),
    chrom("13", 114_364_328, 17_700_000),
    chrom("14", 107_043_718, 17_200_000),
    chrom("15", 101_991_189, 19_000_000),
    chrom("16", 90_338_345, 36_800_000),
    chrom("17", 83_257_441, 25_100_000),
    chrom("18", 80_373_285, 18_500_000),
    chrom("19", 58_617_616, 26_200_000),
    chrom("20", 64_444_167, 28_100_000),
    chrom("21", 46_709_983, 12_000_000),
    chrom("22", 50_818_468, 15_000_000),
    chrom("X", 156_040_895, 61_000_000),
    chrom("Y", 57_227_415, 10_400_000),
];

const T2T: [ChromosomeRef; 24] = [
    chrom("1", 248_387_328, 124_048_267),
    chrom("2", 242_696_752, 93_503_283),
    chrom("3", 201_105_948, 94_076_514),
    chrom("4", 193_574_945, 52_452_474),
    chrom("5", 182_045_439, 48_317_879),
    chrom("6", 172_126_628, 59_672_548),
    chrom("7", 160_567_428, 62_064_435),
    chrom("8", 146_259_331, 45_270_456),
    chrom("9", 150_617_247, 46_267_185),
    chrom("10", 134_758_134, 40_649_191),
    chrom("11", 135_127_769, 52_743_313),
    chrom("12", 133_324_548, 35_911_664),
    chrom("13", 113_566_686, 16_522_942),
    chrom("14", 101_161_492, 11_400_261),
    chrom("15", 99_753_195, 17_186_630),
    chrom("16", 96_330_374, 36_838_903),
    chrom("17", 84_276_897, 25_689_679),
    chrom("18", 80_542_538, 18_449_624),
    chrom("19", 61_707_364, 27_792_923),
    chrom("20", 66_210_255, 28_012_753),
    chrom("21", 45_090_682, 11_134_529),
    chrom("22", 51_324_926, 14_249_622),
    chrom("X", 154_259_566, 59_373_565),
    chrom("Y", 62_460_029, 10_724_418),
];

/// Supported human genome builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenomeBuild {
    Hg19,
    Hg38,
    T2t,
}

impl GenomeBuild {
    pub const ALL: [GenomeBuild; 3] = [GenomeBuild::Hg19, GenomeBuild::Hg38, GenomeBuild::T2t];

    /// Chromosomes in display order, top row first.
    pub fn chromosomes(self) -> &'static [ChromosomeRef] {
        match self {
            GenomeBuild::Hg19 => &HG19,
            GenomeBuild::Hg38 => &HG38,
            GenomeBuild::T2t => &T2T,
        }
    }

    pub fn get(self, id: &str) -> Option<&'static ChromosomeRef> {
        self.chromosomes().iter().find(|c| c.id == id)
    }

    pub fn contains(self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeBuild::Hg19 => write!(f, "hg19"),
            GenomeBuild::Hg38 => write!(f, "hg38"),
            GenomeBuild::T2t => write!(f, "T2T"),
        }
    }
}

impl FromStr for GenomeBuild {
    type Err = IdeogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hg19" => Ok(GenomeBuild::Hg19),
            "hg38" => Ok(GenomeBuild::Hg38),
            "t2t" => Ok(GenomeBuild::T2t),
            _ => Err(IdeogramError::UnknownGenome(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_parse_builds() {
        assert_eq!("hg19".parse::<GenomeBuild>().unwrap(), GenomeBuild::Hg19);
        assert_eq!("HG38".parse::<GenomeBuild>().unwrap(), GenomeBuild::Hg38);
        assert_eq!("T2T".parse::<GenomeBuild>().unwrap(), GenomeBuild::T2t);
    }

    #[test]
    fn test_unknown_build_is_configuration_error() {
        let err = "mm10".parse::<GenomeBuild>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_tables_are_well_formed() {
        for build in GenomeBuild::ALL {
            let chroms = build.chromosomes();
            assert_eq!(chroms.len(), 24, "{build}");
            let ids: FxHashSet<&str> = chroms.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 24, "duplicate ids in {build}");
            for c in chroms {
                assert!(c.centromere_bp > 0 && c.centromere_bp < c.total_length_bp);
            }
            assert_eq!(chroms[0].id, "1");
            assert_eq!(chroms[23].id, "Y");
        }
    }

    #[test]
    fn test_lookup() {
        let chr21 = GenomeBuild::Hg38.get("21").unwrap();
        assert_eq!(chr21.total_length_bp, 46_709_983);
        assert_eq!(chr21.centromere_bp, 12_000_000);
        assert!(!GenomeBuild::Hg38.contains("MT"));
    }
}
