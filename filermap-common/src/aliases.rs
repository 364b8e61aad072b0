/// Canonical filer alias → historical hostnames that now live on it.
///
/// Alternates are stored lower-case; lookups lower-case their input first.
/// When a name appears under more than one filer the earlier entry wins.
pub const FILER_ALIASES: &[(&str, &[&str])] = &[
    (
        "fld3filersvm",
        &["assdnt2", "assdnt20", "assdntcad", "fld3file1", "fld3filer"],
    ),
    (
        "fld4filersvm",
        &["bop600", "imad3", "imad4", "imaddiskfarm", "meaddata", "pid6", "fld4filer"],
    ),
    (
        "fld5filersvm",
        &[
            "agric",
            "btsapps",
            "btssce",
            "dtd1",
            "iofd1",
            "itd1lm",
            "itd3lm",
            "mced1nt",
            "mced2nt",
            "pipes1",
            "pricesfp01",
            "serv01",
            "serv02",
            "servtax",
            "sieid2",
            "fld5filer",
            "tranfs",
        ],
    ),
    (
        "fld6filersvm",
        &[
            "brd2",
            "brdfcdm",
            "geo",
            "geoapps",
            "geodepot2",
            "geoenterprise",
            "meth1",
            "meth4",
            "ottfifp03",
            "ottfifp04",
            "stds1",
            "fld6filer",
        ],
    ),
    (
        "fld7filersvm",
        &[
            "alpha",
            "eit-awsfs-dev1",
            "g-spec",
            "mtlfp01",
            "oidhome",
            "oidnt6",
            "oidnt7",
            "ordd1",
            "orddghost",
            "rob1",
            "rob3",
            "robweb",
            "yeti-awsfs-dev1",
            "fld7filer",
        ],
    ),
    (
        "fld8filersvm",
        &[
            "ccjsnt1",
            "co1",
            "codalg3",
            "codcola",
            "codfile",
            "csmp",
            "ctces01",
            "ctces02",
            "dem4",
            "eit-awsfs-stg1",
            "hfss3",
            "lhs1",
            "lhs2",
            "lhs3",
            "lhs4",
            "lhs5",
            "lhs6",
            "saad1",
            "sasd6",
            "fld8filer",
        ],
    ),
    (
        "fld9filersvm",
        &[
            "blmamwnt",
            "hamg1",
            "hlth",
            "hlth_apps",
            "hlth_projects",
            "hlth_users",
            "semg1",
            "fld9filer",
        ],
    ),
    (
        "stcffb03svm",
        &["stcffb03", "eit-bwsfs-dev1", "f6stcffb01", "stcffb01", "yeti-bwsfs-dev1"],
    ),
    ("stdcflr_sasfs10svm", &["stdcflr-sasfs10"]),
    ("stdcflr_sasfs20svm", &["sttcflr-sasfs20", "ibspdatatest"]),
    ("stmcflr_sasfs61svm", &["stmcflr-sasfs61", "ibspdatamgmt"]),
    ("stpcflr_sasfs50svm", &["stpcflr-sasfs50", "f8lad", "ibspdata"]),
    ("stqcflr_sasfs40svm", &["stqcflr-sasfs40", "ibspdataqa"]),
    ("sttcflr_sasfs10svm", &["ibspdatadev"]),
    ("stucflr_sasfs30svm", &["stucflr-sasfs30", "ibspdatauat"]),
    ("taxfilersvm", &["taxfiler", "taxadmin"]),
];

/// Map a filer hostname onto its canonical storage alias.
///
/// Unknown names are returned lower-cased, on the assumption that they
/// already are canonical.
pub fn remap_filer_aliases(name: &str) -> String {
    let name = name.to_lowercase();
    FILER_ALIASES
        .iter()
        .find(|(_, alternates)| alternates.contains(&name.as_str()))
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or(name)
}

/// Canonical filer aliases in table order.
pub fn canonical_names() -> impl Iterator<Item = &'static str> {
    FILER_ALIASES.iter().map(|(canonical, _)| *canonical)
}

/// Historical hostnames listed for a canonical alias.
pub fn alternates_for(canonical: &str) -> Option<&'static [&'static str]> {
    FILER_ALIASES
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, alternates)| *alternates)
}
