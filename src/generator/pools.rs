use crate::models::Language;

pub struct NamePools {
    pub classic_prefixes: &'static [&'static str],
    pub classic_suffixes: &'static [&'static str],
    pub poetic_adjectives: &'static [&'static str],
    pub poetic_nouns: &'static [&'static str],
    pub mythological_titles: &'static [&'static str],
    pub mythological_beings: &'static [&'static str],
    pub mythological_realms: &'static [&'static str],
    pub descriptive_terms: &'static [&'static str],
    pub descriptive_subjects: &'static [&'static str],
    pub cryptic_prefixes: &'static [&'static str],
    pub cryptic_suffixes: &'static [&'static str],
}

pub fn name_pools(lang: Language) -> &'static NamePools {
    match lang {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

static ES: NamePools = NamePools {
    classic_prefixes: &CLASSIC_PREFIXES_ES,
    classic_suffixes: &CLASSIC_SUFFIXES_ES,
    poetic_adjectives: &POETIC_ADJECTIVES_ES,
    poetic_nouns: &POETIC_NOUNS_ES,
    mythological_titles: &MYTHOLOGICAL_TITLES_ES,
    mythological_beings: &MYTHOLOGICAL_BEINGS_ES,
    mythological_realms: &MYTHOLOGICAL_REALMS_ES,
    descriptive_terms: &DESCRIPTIVE_TERMS_ES,
    descriptive_subjects: &DESCRIPTIVE_SUBJECTS_ES,
    cryptic_prefixes: &CRYPTIC_PREFIXES_ES,
    cryptic_suffixes: &CRYPTIC_SUFFIXES_ES,
};

static EN: NamePools = NamePools {
    classic_prefixes: &CLASSIC_PREFIXES_EN,
    classic_suffixes: &CLASSIC_SUFFIXES_EN,
    poetic_adjectives: &POETIC_ADJECTIVES_EN,
    poetic_nouns: &POETIC_NOUNS_EN,
    mythological_titles: &MYTHOLOGICAL_TITLES_EN,
    mythological_beings: &MYTHOLOGICAL_BEINGS_EN,
    mythological_realms: &MYTHOLOGICAL_REALMS_EN,
    descriptive_terms: &DESCRIPTIVE_TERMS_EN,
    descriptive_subjects: &DESCRIPTIVE_SUBJECTS_EN,
    cryptic_prefixes: &CRYPTIC_PREFIXES_EN,
    cryptic_suffixes: &CRYPTIC_SUFFIXES_EN,
};

/// Greek-letter cores shared by every language.
pub const CRYPTIC_CORES: [&str; 24] = [
    "ALPHA",
    "BETA",
    "GAMMA",
    "DELTA",
    "EPSILON",
    "ZETA",
    "ETA",
    "THETA",
    "IOTA",
    "KAPPA",
    "LAMBDA",
    "MU",
    "NU",
    "XI",
    "OMICRON",
    "PI",
    "RHO",
    "SIGMA",
    "TAU",
    "UPSILON",
    "PHI",
    "CHI",
    "PSI",
    "OMEGA",
];

const CLASSIC_PREFIXES_ES: [&str; 30] = [
    "El Olvidado",
    "La Sombra",
    "El Errante",
    "La Perdida",
    "El Caído",
    "La Abandonada",
    "El Reverso",
    "La Silenciosa",
    "El Vacío",
    "La Eco",
    "El Espectro",
    "La Fantasma",
    "El Susurro",
    "La Lamentación",
    "El Gemido",
    "La Penumbra",
    "El Desterrado",
    "La Exiliada",
    "El Fragmento",
    "La Ruina",
    "El Despojo",
    "La Ceniza",
    "El Resto",
    "La Huella",
    "El Vestigio",
    "La Reliquia",
    "El Recuerdo",
    "La Memoria",
    "El Olvido",
    "La Ausencia",
];

const CLASSIC_SUFFIXES_ES: [&str; 30] = [
    "de Base",
    "del Bloque {block}",
    "sin Gas",
    "sin Hogar",
    "del Pasado",
    "Eterno",
    "Olvidado",
    "sin Retorno",
    "de las Profundidades",
    "del Abismo",
    "de la Oscuridad",
    "del Limbo",
    "sin Nombre",
    "sin Destino",
    "de la Cadena",
    "del Void",
    "sin Esperanza",
    "Perdido",
    "Errante",
    "Solitario",
    "Abandonado",
    "Roto",
    "Fragmentado",
    "Disperso",
    "Desvanecido",
    "Consumido",
    "Agotado",
    "Derrotado",
    "Vencido",
    "Colapsado",
];

const POETIC_ADJECTIVES_ES: [&str; 30] = [
    "Melancólico",
    "Etéreo",
    "Sombrío",
    "Silente",
    "Fugaz",
    "Tenue",
    "Difuso",
    "Pálido",
    "Gélido",
    "Árido",
    "Desolado",
    "Nostálgico",
    "Pensativo",
    "Taciturno",
    "Lacónico",
    "Enigmático",
    "Críptico",
    "Hermético",
    "Oculto",
    "Velado",
    "Nebuloso",
    "Brumoso",
    "Espectral",
    "Fantasmal",
    "Translúcido",
    "Diáfano",
    "Inmaterial",
    "Incorpóreo",
    "Intangible",
    "Invisible",
];

const POETIC_NOUNS_ES: [&str; 30] = [
    "Suspiro",
    "Lamento",
    "Murmullo",
    "Susurro",
    "Gemido",
    "Sollozo",
    "Queja",
    "Clamor",
    "Eco",
    "Reflejo",
    "Espejismo",
    "Ilusión",
    "Fantasía",
    "Sueño",
    "Pesadilla",
    "Visión",
    "Aparición",
    "Presagio",
    "Augurio",
    "Presencia",
    "Esencia",
    "Alma",
    "Espíritu",
    "Ente",
    "Ser",
    "Existencia",
    "Vacío",
    "Nada",
    "Silencio",
    "Quietud",
];

const MYTHOLOGICAL_TITLES_ES: [&str; 20] = [
    "el Guardián",
    "el Centinela",
    "el Vigilante",
    "el Custodio",
    "el Protector",
    "el Defensor",
    "el Portador",
    "el Mensajero",
    "el Heraldo",
    "el Profeta",
    "el Vidente",
    "el Oráculo",
    "el Sabio",
    "el Ancestro",
    "el Primigenio",
    "el Antiguo",
    "el Eterno",
    "el Inmortal",
    "el Errante",
    "el Vagabundo",
];

const MYTHOLOGICAL_BEINGS_ES: [&str; 20] = [
    "Espectro",
    "Ánima",
    "Revenant",
    "Wraith",
    "Shade",
    "Banshee",
    "Phantom",
    "Geist",
    "Umbra",
    "Nephilim",
    "Daemon",
    "Eidolon",
    "Lemure",
    "Larvae",
    "Manes",
    "Psych",
    "Ankou",
    "Draugr",
    "Nachzehrer",
    "Vetala",
];

const MYTHOLOGICAL_REALMS_ES: [&str; 20] = [
    "de las Sombras",
    "del Vacío",
    "del Abismo",
    "del Éter",
    "del Astral",
    "del Limbo",
    "del Purgatorio",
    "del Inframundo",
    "de los Perdidos",
    "de los Olvidados",
    "de la Niebla",
    "de la Penumbra",
    "del Crepúsculo",
    "del Ocaso",
    "de la Medianoche",
    "del Silencio",
    "del Olvido",
    "de la Eternidad",
    "del Tiempo",
    "del Espacio",
];

const DESCRIPTIVE_TERMS_ES: [&str; 20] = [
    "Transacción",
    "Código",
    "Programa",
    "Script",
    "Algoritmo",
    "Proceso",
    "Función",
    "Comando",
    "Instrucción",
    "Operación",
    "Bloque",
    "Nodo",
    "Hash",
    "Token",
    "Wallet",
    "Contract",
    "Estado",
    "Memoria",
    "Registro",
    "Señal",
];

const DESCRIPTIVE_SUBJECTS_ES: [&str; 20] = [
    "Corrupto",
    "Fallido",
    "Revertido",
    "Cancelado",
    "Rechazado",
    "Anulado",
    "Perdido",
    "Fragmentado",
    "Incompleto",
    "Truncado",
    "Dañado",
    "Roto",
    "Defectuoso",
    "Erróneo",
    "Inválido",
    "Obsoleto",
    "Abandonado",
    "Suspendido",
    "Congelado",
    "Bloqueado",
];

const CRYPTIC_PREFIXES_ES: [&str; 10] = [
    "TX",
    "BLK",
    "GAS",
    "ERR",
    "REV",
    "FAIL",
    "NULL",
    "VOID",
    "LOST",
    "DEAD",
];

const CRYPTIC_SUFFIXES_ES: [&str; 10] = [
    "NULO",
    "PERDIDO",
    "CAÍDO",
    "ROTO",
    "MUERTO",
    "VACÍO",
    "OSCURO",
    "FANTASMA",
    "SOMBRA",
    "ECO",
];

const CLASSIC_PREFIXES_EN: [&str; 30] = [
    "The Forgotten",
    "The Shadow",
    "The Wanderer",
    "The Lost",
    "The Fallen",
    "The Abandoned",
    "The Reversed",
    "The Silent",
    "The Void",
    "The Echo",
    "The Specter",
    "The Phantom",
    "The Whisper",
    "The Lament",
    "The Wail",
    "The Gloom",
    "The Banished",
    "The Exiled",
    "The Fragment",
    "The Ruin",
    "The Remnant",
    "The Ash",
    "The Remainder",
    "The Trace",
    "The Vestige",
    "The Relic",
    "The Memory",
    "The Remembrance",
    "The Oblivion",
    "The Absence",
];

const CLASSIC_SUFFIXES_EN: [&str; 30] = [
    "of Base",
    "of Block {block}",
    "without Gas",
    "without Home",
    "of the Past",
    "Eternal",
    "Forgotten",
    "of No Return",
    "of the Depths",
    "of the Abyss",
    "of Darkness",
    "of Limbo",
    "without Name",
    "without Fate",
    "of the Chain",
    "of the Void",
    "without Hope",
    "Lost",
    "Wandering",
    "Solitary",
    "Abandoned",
    "Broken",
    "Fragmented",
    "Scattered",
    "Faded",
    "Consumed",
    "Depleted",
    "Defeated",
    "Vanquished",
    "Collapsed",
];

const POETIC_ADJECTIVES_EN: [&str; 30] = [
    "Melancholic",
    "Ethereal",
    "Shadowy",
    "Silent",
    "Fleeting",
    "Faint",
    "Diffuse",
    "Pale",
    "Frigid",
    "Barren",
    "Desolate",
    "Nostalgic",
    "Pensive",
    "Taciturn",
    "Laconic",
    "Enigmatic",
    "Cryptic",
    "Hermetic",
    "Hidden",
    "Veiled",
    "Nebulous",
    "Misty",
    "Spectral",
    "Ghostly",
    "Translucent",
    "Diaphanous",
    "Immaterial",
    "Incorporeal",
    "Intangible",
    "Invisible",
];

const POETIC_NOUNS_EN: [&str; 30] = [
    "Sigh",
    "Lament",
    "Murmur",
    "Whisper",
    "Moan",
    "Sob",
    "Complaint",
    "Cry",
    "Echo",
    "Reflection",
    "Mirage",
    "Illusion",
    "Fantasy",
    "Dream",
    "Nightmare",
    "Vision",
    "Apparition",
    "Omen",
    "Augury",
    "Presence",
    "Essence",
    "Soul",
    "Spirit",
    "Entity",
    "Being",
    "Existence",
    "Void",
    "Nothing",
    "Silence",
    "Stillness",
];

const MYTHOLOGICAL_TITLES_EN: [&str; 20] = [
    "the Guardian",
    "the Sentinel",
    "the Watcher",
    "the Keeper",
    "the Protector",
    "the Defender",
    "the Bearer",
    "the Messenger",
    "the Herald",
    "the Prophet",
    "the Seer",
    "the Oracle",
    "the Sage",
    "the Ancestor",
    "the Primordial",
    "the Ancient",
    "the Eternal",
    "the Immortal",
    "the Wanderer",
    "the Vagrant",
];

const MYTHOLOGICAL_BEINGS_EN: [&str; 20] = [
    "Specter",
    "Anima",
    "Revenant",
    "Wraith",
    "Shade",
    "Banshee",
    "Phantom",
    "Geist",
    "Umbra",
    "Nephilim",
    "Daemon",
    "Eidolon",
    "Lemure",
    "Larvae",
    "Manes",
    "Psyche",
    "Ankou",
    "Draugr",
    "Nachzehrer",
    "Vetala",
];

const MYTHOLOGICAL_REALMS_EN: [&str; 20] = [
    "of Shadows",
    "of the Void",
    "of the Abyss",
    "of the Ether",
    "of the Astral",
    "of Limbo",
    "of Purgatory",
    "of the Underworld",
    "of the Lost",
    "of the Forgotten",
    "of Mist",
    "of Gloom",
    "of Twilight",
    "of Dusk",
    "of Midnight",
    "of Silence",
    "of Oblivion",
    "of Eternity",
    "of Time",
    "of Space",
];

const DESCRIPTIVE_TERMS_EN: [&str; 20] = [
    "Transaction",
    "Code",
    "Program",
    "Script",
    "Algorithm",
    "Process",
    "Function",
    "Command",
    "Instruction",
    "Operation",
    "Block",
    "Node",
    "Hash",
    "Token",
    "Wallet",
    "Contract",
    "State",
    "Memory",
    "Register",
    "Signal",
];

const DESCRIPTIVE_SUBJECTS_EN: [&str; 20] = [
    "Corrupted",
    "Failed",
    "Reverted",
    "Cancelled",
    "Rejected",
    "Nullified",
    "Lost",
    "Fragmented",
    "Incomplete",
    "Truncated",
    "Damaged",
    "Broken",
    "Defective",
    "Erroneous",
    "Invalid",
    "Obsolete",
    "Abandoned",
    "Suspended",
    "Frozen",
    "Blocked",
];

const CRYPTIC_PREFIXES_EN: [&str; 10] = [
    "TX",
    "BLK",
    "GAS",
    "ERR",
    "REV",
    "FAIL",
    "NULL",
    "VOID",
    "LOST",
    "DEAD",
];

const CRYPTIC_SUFFIXES_EN: [&str; 10] = [
    "NULL",
    "LOST",
    "FALLEN",
    "BROKEN",
    "DEAD",
    "EMPTY",
    "DARK",
    "GHOST",
    "SHADOW",
    "ECHO",
];
