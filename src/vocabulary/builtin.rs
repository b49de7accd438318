//! Built-in BIDS vocabulary: entity table, suffixes, extensions and
//! modality folders.

/// Value fragment for index-like entities (`run-1`, `echo-2`).
pub const NUMERIC_FRAGMENT: &str = "[0-9]+";
/// Value fragment for label-like entities (`task-rest`, `acq-highres`).
pub const LABEL_FRAGMENT: &str = "[a-zA-Z0-9]+";

/// `(code, display name, value fragment)` in canonical order.
pub(crate) const ENTITIES: &[(&str, &str, &str)] = &[
    ("sub", "subject", LABEL_FRAGMENT),
    ("ses", "session", LABEL_FRAGMENT),
    ("sample", "sample", LABEL_FRAGMENT),
    ("task", "task", LABEL_FRAGMENT),
    ("tracksys", "tracksys", LABEL_FRAGMENT),
    ("acq", "acquisition", LABEL_FRAGMENT),
    ("nuc", "nucleus", LABEL_FRAGMENT),
    ("voi", "volume", LABEL_FRAGMENT),
    ("ce", "ceagent", LABEL_FRAGMENT),
    ("trc", "tracer", LABEL_FRAGMENT),
    ("stain", "stain", LABEL_FRAGMENT),
    ("rec", "reconstruction", LABEL_FRAGMENT),
    ("dir", "direction", LABEL_FRAGMENT),
    ("run", "run", NUMERIC_FRAGMENT),
    ("mod", "modality", LABEL_FRAGMENT),
    ("echo", "echo", NUMERIC_FRAGMENT),
    ("flip", "flip", NUMERIC_FRAGMENT),
    ("inv", "inversion", NUMERIC_FRAGMENT),
    ("mt", "mtransfer", LABEL_FRAGMENT),
    ("part", "part", LABEL_FRAGMENT),
    ("proc", "processing", LABEL_FRAGMENT),
    ("hemi", "hemisphere", LABEL_FRAGMENT),
    ("space", "space", LABEL_FRAGMENT),
    ("split", "split", NUMERIC_FRAGMENT),
    ("recording", "recording", LABEL_FRAGMENT),
    ("chunk", "chunk", NUMERIC_FRAGMENT),
    ("seg", "segmentation", LABEL_FRAGMENT),
    ("res", "resolution", LABEL_FRAGMENT),
    ("den", "density", LABEL_FRAGMENT),
    ("label", "label", LABEL_FRAGMENT),
    ("desc", "description", LABEL_FRAGMENT),
];

pub(crate) const SUFFIXES: &[&str] = &[
    // anat
    "T1w", "T2w", "PDw", "T2starw", "FLAIR", "inplaneT1", "inplaneT2", "PDT2", "angio",
    "T1map", "T2map", "T2starmap", "R1map", "R2map", "R2starmap", "PDmap", "MTRmap", "MTsat",
    "UNIT1", "T1rho", "MWFmap", "MTVmap", "Chimap", "S0map", "M0map", "defacemask", "MESE",
    "MEGRE", "VFA", "IRT1", "MP2RAGE", "MPM", "MTS", "MTR",
    // func
    "bold", "cbv", "phase", "sbref", "noRF",
    // shared task/physio
    "events", "physio", "stim",
    // dwi
    "dwi",
    // fmap
    "phasediff", "phase1", "phase2", "magnitude", "magnitude1", "magnitude2", "fieldmap",
    "epi", "TB1DAM", "TB1EPI", "TB1AFI", "TB1TFL", "TB1RFM", "TB1SRGE", "TB1map", "RB1COR",
    "RB1map",
    // perf
    "asl", "m0scan", "aslcontext", "asllabeling",
    // electrophysiology
    "eeg", "meg", "ieeg", "channels", "electrodes", "coordsystem", "headshape", "markers",
    "photo",
    // beh / pet / nirs / motion / mrs
    "beh", "pet", "blood", "nirs", "optodes", "motion", "svs", "mrsi", "unloc", "mrsref",
    // micr
    "TEM", "SEM", "uCT", "BF", "DF", "PC", "DIC", "FLUO", "CONF", "PLI", "CARS", "2PE", "MPE",
    "SR", "NLO", "OCT", "SPIM", "XPCT",
    // derivatives
    "mask", "dseg", "probseg", "xfm",
    // dataset and subject level tables
    "scans", "sessions", "participants", "samples",
];

/// Extensions without their leading dot.
pub(crate) const EXTENSIONS: &[&str] = &[
    "nii.gz", "nii", "json", "tsv", "tsv.gz", "bval", "bvec", "edf", "vhdr", "vmrk", "eeg",
    "set", "fdt", "bdf", "fif", "ds", "con", "sqd", "mefd", "nwb", "snirf", "mat", "txt",
    "png", "tif", "ome.tif", "ome.btf", "ome.zarr", "jpg", "gii", "h5", "dtseries.nii",
    "dscalar.nii", "label.gii", "surf.gii", "func.gii", "shape.gii",
];

/// Modality folder names recognized as `data_type`.
pub(crate) const DATA_TYPES: &[&str] = &[
    "anat", "beh", "dwi", "eeg", "fmap", "func", "ieeg", "meg", "micr", "motion", "mrs",
    "perf", "pet", "nirs",
];
