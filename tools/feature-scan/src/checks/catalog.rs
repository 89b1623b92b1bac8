//! Every check the engine can run, in report order.
//!
//! The same [`CheckId::applies`] predicate gates both execution and the
//! summary, so the summary lists exactly the checks a run performed.

use crate::config::CheckConfiguration;
use crate::policy::VersionPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    FileConsistency,
    Assigned,
    NewOrUpdated,
    NewOrDeleted,
    Images,
    Soundings,
    Dtons,
    Wrecks,
    Rocks,
    Obstructions,
    Platforms,
    SeabedAreas,
    Moorings,
    Coastlines,
    Lands,
    Coverages,
    Office,
    Summary,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::FileConsistency => "File consistency",
            Section::Assigned => "Assigned features",
            Section::NewOrUpdated => "New or Updated features (excluding carto notes)",
            Section::NewOrDeleted => "New or Deleted features (excluding carto notes)",
            Section::Images => "Images",
            Section::Soundings => "Soundings",
            Section::Dtons => "DTONs",
            Section::Wrecks => "Wrecks",
            Section::Rocks => "Rocks",
            Section::Obstructions => "Obstructions",
            Section::Platforms => "Offshore platforms",
            Section::SeabedAreas => "Seabed areas",
            Section::Moorings => "Mooring facilities",
            Section::Coastlines => "Coastlines",
            Section::Lands => "Land areas",
            Section::Coverages => "Meta coverages",
            Section::Office => "Office checks",
            Section::Summary => "Summary",
        }
    }
}

macro_rules! check_catalog {
    ($( $id:ident => $title:literal ),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CheckId {
            $( $id ),*
        }

        impl CheckId {
            pub const ALL: &'static [CheckId] = &[ $( CheckId::$id ),* ];

            pub fn title(self) -> &'static str {
                match self {
                    $( CheckId::$id => $title ),*
                }
            }
        }
    };
}

check_catalog! {
    Redundancy => "Redundant features",

    AssignedDescription => "Assigned features with empty or missing mandatory attribute description",
    AssignedRemarks => "Assigned features missing mandatory attribute remarks",

    NewUpdatedSorind => "New or Updated features missing mandatory attribute SORIND",
    NewUpdatedSorindInvalid => "New or Updated features with invalid SORIND",
    NewUpdatedSordat => "New or Updated features missing mandatory attribute SORDAT",
    NewUpdatedSordatInvalid => "New or Updated features with invalid SORDAT",
    NewUpdatedRemarks => "New or Updated features missing mandatory attribute remarks",
    NewUpdatedRecommendations => "New or Updated features missing mandatory attribute recommendations",
    NewUpdatedTextLength => "New or Updated features with text attributes over the character limit",

    NewDeletedImages => "New or Deleted features missing images",

    ImagePaths => "Features with invalid image paths",
    ImageNamesSbdare => "SBDARE features with invalid image names",
    ImageNamesOther => "Non-SBDARE features with invalid image names",

    SoundingsTecsou => "New or Updated SOUNDG missing mandatory attribute TECSOU",
    SoundingsQuasou => "New or Updated SOUNDG missing mandatory attribute QUASOU",

    DtonImages => "Special feature types (DTONs) missing images",

    WrecksImages => "New or Updated WRECKS missing images",
    WrecksCatwrk => "New or Updated WRECKS missing mandatory attribute CATWRK",
    WrecksWatlev => "New or Updated WRECKS missing mandatory attribute WATLEV",
    WrecksValsou => "New or Updated WRECKS missing mandatory attribute VALSOU",
    WrecksTecsou => "New or Updated WRECKS with VALSOU missing mandatory attribute TECSOU",
    WrecksQuasou => "New or Updated WRECKS with VALSOU missing mandatory attribute QUASOU",
    WrecksUnknownWatlev => "New or Updated WRECKS with empty VALSOU shall have WATLEV of 'unknown'",
    WrecksUnknownTecsou => "New or Updated WRECKS with empty VALSOU shall have TECSOU of 'unknown'",
    WrecksUnknownQuasou => "New or Updated WRECKS with empty VALSOU shall have QUASOU of 'depth unknown'",
    WrecksWatlevDepth => "New or Updated WRECKS with WATLEV inconsistent with VALSOU",
    WrecksTecsouQuasou => "New or Updated WRECKS with invalid TECSOU and QUASOU combination",

    RocksValsou => "New or Updated UWTROC missing mandatory attribute VALSOU",
    RocksWatlev => "New or Updated UWTROC missing mandatory attribute WATLEV",
    RocksTecsou => "New or Updated UWTROC with VALSOU missing mandatory attribute TECSOU",
    RocksQuasou => "New or Updated UWTROC with VALSOU missing mandatory attribute QUASOU",
    RocksUnknownWatlev => "New or Updated UWTROC with empty VALSOU shall have WATLEV of 'unknown'",
    RocksUnknownTecsou => "New or Updated UWTROC with empty VALSOU shall have TECSOU of 'unknown'",
    RocksUnknownQuasou => "New or Updated UWTROC with empty VALSOU shall have QUASOU of 'depth unknown'",
    RocksWatlevDepth => "New or Updated UWTROC with WATLEV inconsistent with VALSOU",
    RocksTecsouQuasou => "New or Updated UWTROC with invalid TECSOU and QUASOU combination",

    ObstrnImages => "New or Updated OBSTRN points missing images",
    ObstrnValsou => "New or Updated OBSTRN points missing mandatory attribute VALSOU",
    ObstrnWatlev => "New or Updated OBSTRN points missing mandatory attribute WATLEV",
    ObstrnTecsou => "New or Updated OBSTRN with VALSOU missing mandatory attribute TECSOU",
    ObstrnQuasou => "New or Updated OBSTRN with VALSOU missing mandatory attribute QUASOU",
    ObstrnUnknownWatlev => "New or Updated OBSTRN with empty VALSOU shall have WATLEV of 'unknown'",
    ObstrnUnknownTecsou => "New or Updated OBSTRN with empty VALSOU shall have TECSOU of 'unknown'",
    ObstrnUnknownQuasou => "New or Updated OBSTRN with empty VALSOU shall have QUASOU of 'depth unknown'",
    ObstrnWatlevDepth => "New or Updated OBSTRN with WATLEV inconsistent with VALSOU",
    ObstrnTecsouQuasou => "New or Updated OBSTRN with invalid TECSOU and QUASOU combination",
    ObstrnFoulValsou => "New or Updated OBSTRN foul lines/areas with prohibited attribute VALSOU",

    PlatformsImages => "New or Updated OFSPLF missing images",

    SbdareNatsur => "New or Updated SBDARE points missing mandatory attribute NATSUR",
    SbdareNatsurNatqua => "New or Updated SBDARE points with invalid NATSUR and NATQUA combination",
    SbdareNatquaBalance => "New or Updated SBDARE points with more NATQUA than NATSUR values",
    SbdareColourBalance => "New or Updated SBDARE points with more COLOUR than NATSUR values",
    SbdareImages => "New or Updated SBDARE points missing images",
    SbdareLinesNatsur => "New or Updated SBDARE lines/areas missing mandatory attribute NATSUR",

    MooringsCatmor => "New or Updated MORFAC missing mandatory attribute CATMOR",

    CoalneCatcoa => "New or Updated COALNE missing mandatory attribute CATCOA",
    SlconsCatslc => "New or Updated SLCONS missing mandatory attribute CATSLC",

    LandsElevat => "New or Updated LNDARE points missing attribute ELEVAT",
    LandsElevatInvalid => "New or Updated LNDARE with invalid ELEVAT",
    LandsValsou => "New or Updated LNDARE with prohibited attribute VALSOU",
    LandsWatlev => "New or Updated LNDARE with prohibited attribute WATLEV",

    CoverageCatcov => "M_COVR missing mandatory attribute CATCOV",
    CoverageInform => "M_COVR missing mandatory attribute INFORM",

    OfficeProhibited => "Features with prohibited object types",
    OfficeBlueNotesNinfom => "Blue notes missing mandatory attribute NINFOM",
    OfficeBlueNotesKeyword => "Blue notes without a charting action keyword",
    OfficeMqualCatzoc => "M_QUAL missing mandatory attribute CATZOC",
    OfficeMqualSursta => "M_QUAL missing mandatory attribute SURSTA",
    OfficeMqualSurend => "M_QUAL missing mandatory attribute SUREND",
    OfficeMqualTecsou => "M_QUAL missing mandatory attribute TECSOU",
}

impl CheckId {
    /// Whether this check runs under the given configuration.
    pub fn applies(self, config: &CheckConfiguration, policy: &VersionPolicy) -> bool {
        use CheckId::*;
        match self {
            NewUpdatedTextLength => policy.character_limit_check,
            ImageNamesSbdare | ImageNamesOther => policy.image_name_checks,
            WrecksUnknownWatlev | WrecksUnknownTecsou | WrecksUnknownQuasou
            | RocksUnknownWatlev | RocksUnknownTecsou | RocksUnknownQuasou
            | ObstrnUnknownWatlev | ObstrnUnknownTecsou | ObstrnUnknownQuasou => {
                policy.unknown_valsou_codes
            }
            SbdareNatsurNatqua | SbdareNatquaBalance | SbdareColourBalance => {
                policy.seabed_combinations
            }
            OfficeProhibited | OfficeBlueNotesNinfom | OfficeBlueNotesKeyword
            | OfficeMqualCatzoc | OfficeMqualSursta | OfficeMqualSurend
            | OfficeMqualTecsou => config.is_office(),
            _ => true,
        }
    }
}

/// Check ids shared by the WRECKS, UWTROC and OBSTRN depth rules.
#[derive(Debug, Clone, Copy)]
pub struct DepthCheckIds {
    pub tecsou: CheckId,
    pub quasou: CheckId,
    pub unknown_watlev: CheckId,
    pub unknown_tecsou: CheckId,
    pub unknown_quasou: CheckId,
    pub watlev_depth: CheckId,
    pub pairs: CheckId,
}

pub const WRECKS_DEPTH: DepthCheckIds = DepthCheckIds {
    tecsou: CheckId::WrecksTecsou,
    quasou: CheckId::WrecksQuasou,
    unknown_watlev: CheckId::WrecksUnknownWatlev,
    unknown_tecsou: CheckId::WrecksUnknownTecsou,
    unknown_quasou: CheckId::WrecksUnknownQuasou,
    watlev_depth: CheckId::WrecksWatlevDepth,
    pairs: CheckId::WrecksTecsouQuasou,
};

pub const ROCKS_DEPTH: DepthCheckIds = DepthCheckIds {
    tecsou: CheckId::RocksTecsou,
    quasou: CheckId::RocksQuasou,
    unknown_watlev: CheckId::RocksUnknownWatlev,
    unknown_tecsou: CheckId::RocksUnknownTecsou,
    unknown_quasou: CheckId::RocksUnknownQuasou,
    watlev_depth: CheckId::RocksWatlevDepth,
    pairs: CheckId::RocksTecsouQuasou,
};

pub const OBSTRN_DEPTH: DepthCheckIds = DepthCheckIds {
    tecsou: CheckId::ObstrnTecsou,
    quasou: CheckId::ObstrnQuasou,
    unknown_watlev: CheckId::ObstrnUnknownWatlev,
    unknown_tecsou: CheckId::ObstrnUnknownTecsou,
    unknown_quasou: CheckId::ObstrnUnknownQuasou,
    watlev_depth: CheckId::ObstrnWatlevDepth,
    pairs: CheckId::ObstrnTecsouQuasou,
};
