use crate::models::{GhostType, Language};

pub struct Locale {
    pub stories: StoryTable,
    pub no_spirits_found: &'static str,
    pub invocation_failed: &'static str,
}

/// Three templates per ghost type. Placeholders: `{age}`, `{value}`, `{gasUsed}`.
pub struct StoryTable {
    pub out_of_gas: [&'static str; 3],
    pub insufficient_balance: [&'static str; 3],
    pub reverted: [&'static str; 3],
    pub abandoned_wallet: [&'static str; 3],
    pub failed_swap: [&'static str; 3],
    pub failed_nft_mint: [&'static str; 3],
}

impl StoryTable {
    pub fn templates(&self, ghost_type: GhostType) -> &[&'static str; 3] {
        match ghost_type {
            GhostType::OutOfGas => &self.out_of_gas,
            GhostType::InsufficientBalance => &self.insufficient_balance,
            GhostType::Reverted => &self.reverted,
            GhostType::AbandonedWallet => &self.abandoned_wallet,
            GhostType::FailedSwap => &self.failed_swap,
            GhostType::FailedNftMint => &self.failed_nft_mint,
        }
    }
}

pub fn locale(lang: Language) -> &'static Locale {
    match lang {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

static ES: Locale = Locale {
    stories: StoryTable {
        out_of_gas: [
            "Corrí tan rápido que me quedé sin aliento... {gasUsed} de energía consumida, pero no fue suficiente.",
            "El camino era largo, pero mi fuerza se agotó a medio camino. Solo quedó el eco de {gasUsed} de esfuerzo.",
            "Intenté alcanzar mi destino, pero el universo me detuvo. {gasUsed} fue todo lo que pude dar.",
        ],
        insufficient_balance: [
            "Mis bolsillos estaban vacíos cuando más los necesitaba. Soñaba con {value} ETH, pero solo tenía sombras.",
            "Hace {age} días, intenté un último movimiento... {value} ETH era todo lo que quedaba.",
            "La pobreza me alcanzó en el peor momento. {value} ETH no fueron suficientes para mi última voluntad.",
        ],
        reverted: [
            "El universo rechazó mi existencia. Cada intento fue en vano.",
            "Las reglas del mundo me lo impidieron. Fui reversado al olvido.",
            "Intenté existir, pero las leyes cósmicas me borraron de la realidad.",
        ],
        abandoned_wallet: [
            "Hace {age} días, mi dueño me dejó atrás. {value} ETH esperan en el vacío.",
            "Nadie ha vuelto en {age} días. Solo quedo yo y {value} ETH olvidados.",
            "El silencio lleva {age} días. ¿Volverá alguien por estos {value} ETH?",
        ],
        failed_swap: [
            "Quería intercambiar mi destino, pero el mercado me rechazó.",
            "El swap que nunca fue. {gasUsed} de esperanza quemada.",
            "Intenté cambiar, pero las tasas me condenaron al fracaso.",
        ],
        failed_nft_mint: [
            "Iba a ser único, iba a ser arte... pero nunca nací.",
            "El mint que nunca ocurrió. Un NFT fantasma que jamás existió.",
            "Soñé con ser coleccionado, pero me quedé en el limbo digital.",
        ],
    },
    no_spirits_found: "No se encontraron espíritus. Inténtalo de nuevo.",
    invocation_failed: "Error al invocar el fantasma",
};

static EN: Locale = Locale {
    stories: StoryTable {
        out_of_gas: [
            "I ran so fast I ran out of breath... {gasUsed} energy consumed, but it wasn't enough.",
            "The road was long, but my strength gave out halfway. Only the echo of {gasUsed} effort remained.",
            "I tried to reach my destination, but the universe stopped me. {gasUsed} was all I could give.",
        ],
        insufficient_balance: [
            "My pockets were empty when I needed them most. I dreamed of {value} ETH, but had only shadows.",
            "{age} days ago, I tried one last move... {value} ETH was all that remained.",
            "Poverty caught up with me at the worst time. {value} ETH wasn't enough for my final wish.",
        ],
        reverted: [
            "The universe rejected my existence. Every attempt was in vain.",
            "The rules of the world prevented me. I was reversed into oblivion.",
            "I tried to exist, but cosmic laws erased me from reality.",
        ],
        abandoned_wallet: [
            "{age} days ago, my owner left me behind. {value} ETH wait in the void.",
            "No one has returned in {age} days. Just me and {value} ETH, forgotten.",
            "The silence has lasted {age} days. Will anyone come back for these {value} ETH?",
        ],
        failed_swap: [
            "I wanted to swap my destiny, but the market rejected me.",
            "The swap that never was. {gasUsed} of hope burned.",
            "I tried to change, but fees condemned me to failure.",
        ],
        failed_nft_mint: [
            "I was going to be unique, I was going to be art... but I was never born.",
            "The mint that never happened. A ghost NFT that never existed.",
            "I dreamed of being collected, but remained in digital limbo.",
        ],
    },
    no_spirits_found: "No spirits found. Please try again.",
    invocation_failed: "Error invoking the ghost",
};
