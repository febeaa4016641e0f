//! Static question catalog
//!
//! Maps a 1-based block number to its ordered prompt list. The catalog is
//! the reference RIASEC instance: 6 blocks of 8 prompts, one block per
//! dimension (Realista, Investigativo, Artístico, Social, Empreendedor,
//! Convencional). Catalog order is significant: the scoring service
//! interprets answer positions against this traversal order.

use thiserror::Error;

/// Number of question blocks in the catalog
pub const TOTAL_BLOCKS: usize = 6;
/// Number of prompts per block
pub const BLOCK_SIZE: usize = 8;
/// Total questions across all blocks
pub const TOTAL_QUESTIONS: usize = TOTAL_BLOCKS * BLOCK_SIZE;

/// Catalog lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Block number outside the catalog range (unreachable when driven by
    /// the questionnaire controller, which only yields in-range blocks)
    #[error("block {0} outside catalog range 1..={TOTAL_BLOCKS}")]
    BlockOutOfRange(usize),
}

/// Question prompts per block, in catalog order
const PROMPTS: [[&str; BLOCK_SIZE]; TOTAL_BLOCKS] = [
    // Bloco 1 (R1-R8)
    [
        "Testar a qualidade das peças antes do envio",
        "Assentar tijolos ou azulejos em construções",
        "Trabalhar em uma plataforma de perfuração de petróleo offshore",
        "Montar peças eletrônicas",
        "Operar uma máquina de moagem em uma fábrica",
        "Consertar uma torneira quebrada",
        "Montar produtos em uma fábrica",
        "Instalar pisos em casas",
    ],
    // Bloco 2 (I1-I8)
    [
        "Estudar a estrutura do corpo humano",
        "Estudar o comportamento animal",
        "Fazer pesquisas sobre plantas ou animais",
        "Desenvolver um novo tratamento ou procedimento médico",
        "Conduzir pesquisas biológicas",
        "Estudar baleias e outros tipos de vida marinha",
        "Trabalhar em um laboratório de biologia",
        "Fazer um mapa do fundo do oceano",
    ],
    // Bloco 3 (A1-A8)
    [
        "Conduzir um coral musical",
        "Dirigir uma peça de teatro",
        "Design de arte para revistas",
        "Escrever uma música",
        "Escrever livros ou peças teatrais",
        "Tocar um instrumento musical",
        "Realizar acrobacias para um filme ou programa de televisão",
        "Criar cenários para peças de teatro",
    ],
    // Bloco 4 (S1-S8)
    [
        "Orientar pessoas em suas carreiras",
        "Fazer trabalho voluntário em uma organização sem fins lucrativos",
        "Ajudar pessoas com problemas de drogas ou álcool",
        "Ensinar a um indivíduo uma rotina de exercícios",
        "Ajudar pessoas com problemas familiares",
        "Supervisionar as atividades das crianças em um acampamento",
        "Ensinar as crianças a ler",
        "Ajudar idosos com suas atividades diárias",
    ],
    // Bloco 5 (E1-E8)
    [
        "Vender franquias de restaurantes para pessoas físicas",
        "Vender mercadorias em uma loja de departamentos",
        "Gerenciar as operações de um hotel",
        "Administrar um salão de beleza ou barbearia",
        "Gerencie um departamento dentro de uma grande empresa",
        "Gerenciar uma loja de roupas",
        "Vender casas",
        "Administrar uma loja de brinquedos",
    ],
    // Bloco 6 (C1-C8)
    [
        "Gerar os cheques mensais de folha de pagamento para um escritório",
        "Inventariar suprimentos usando um computador hand-held",
        "Usar um programa de computador para gerar faturas de clientes",
        "Manter registros de funcionários",
        "Calcular e registrar dados estatísticos e outros dados numéricos",
        "Operar uma calculadora",
        "Lidar com transações bancárias de clientes",
        "Manter registros de envio e recebimento",
    ],
];

/// Look up the ordered prompt list for a 1-based block number
pub fn block_prompts(
    block: usize,
) -> Result<&'static [&'static str; BLOCK_SIZE], CatalogError> {
    if (1..=TOTAL_BLOCKS).contains(&block) {
        Ok(&PROMPTS[block - 1])
    } else {
        Err(CatalogError::BlockOutOfRange(block))
    }
}
