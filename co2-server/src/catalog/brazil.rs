//! Built-in route table for Brazilian cities.

use super::{RouteCatalog, RouteCatalogBuilder};

/// Create the default catalog of Brazilian road distances.
///
/// Distances are approximate road distances in kilometres between state
/// capitals and major regional cities.
pub fn brazil_routes() -> RouteCatalog {
    RouteCatalogBuilder::new()
        // Southeast
        .add("São Paulo, SP", "Rio de Janeiro, RJ", 430.0)
        .add("São Paulo, SP", "Belo Horizonte, MG", 586.0)
        .add("São Paulo, SP", "Campinas, SP", 95.0)
        .add("São Paulo, SP", "Santos, SP", 72.0)
        .add("São Paulo, SP", "Ribeirão Preto, SP", 313.0)
        .add("São Paulo, SP", "Sorocaba, SP", 100.0)
        .add("São Paulo, SP", "São José dos Campos, SP", 94.0)
        .add("Campinas, SP", "Ribeirão Preto, SP", 224.0)
        .add("Rio de Janeiro, RJ", "Belo Horizonte, MG", 434.0)
        .add("Rio de Janeiro, RJ", "Vitória, ES", 521.0)
        .add("Rio de Janeiro, RJ", "Niterói, RJ", 13.0)
        .add("Rio de Janeiro, RJ", "Petrópolis, RJ", 68.0)
        .add("Belo Horizonte, MG", "Vitória, ES", 524.0)
        .add("Belo Horizonte, MG", "Uberlândia, MG", 537.0)
        // South
        .add("São Paulo, SP", "Curitiba, PR", 408.0)
        .add("São Paulo, SP", "Florianópolis, SC", 705.0)
        .add("São Paulo, SP", "Porto Alegre, RS", 1109.0)
        .add("Curitiba, PR", "Florianópolis, SC", 300.0)
        .add("Curitiba, PR", "Londrina, PR", 381.0)
        .add("Curitiba, PR", "Joinville, SC", 130.0)
        .add("Florianópolis, SC", "Porto Alegre, RS", 476.0)
        .add("Porto Alegre, RS", "Caxias do Sul, RS", 127.0)
        // Center-West
        .add("São Paulo, SP", "Brasília, DF", 1015.0)
        .add("Rio de Janeiro, RJ", "Brasília, DF", 1148.0)
        .add("Belo Horizonte, MG", "Brasília, DF", 716.0)
        .add("Brasília, DF", "Goiânia, GO", 209.0)
        .add("Goiânia, GO", "Uberlândia, MG", 344.0)
        .add("Brasília, DF", "Cuiabá, MT", 1133.0)
        .add("Cuiabá, MT", "Campo Grande, MS", 694.0)
        .add("São Paulo, SP", "Campo Grande, MS", 1014.0)
        // Northeast
        .add("Belo Horizonte, MG", "Salvador, BA", 1372.0)
        .add("Brasília, DF", "Salvador, BA", 1446.0)
        .add("Salvador, BA", "Aracaju, SE", 356.0)
        .add("Aracaju, SE", "Maceió, AL", 294.0)
        .add("Maceió, AL", "Recife, PE", 285.0)
        .add("Salvador, BA", "Recife, PE", 839.0)
        .add("Recife, PE", "João Pessoa, PB", 120.0)
        .add("João Pessoa, PB", "Natal, RN", 185.0)
        .add("Natal, RN", "Fortaleza, CE", 537.0)
        .add("Recife, PE", "Fortaleza, CE", 800.0)
        .add("Fortaleza, CE", "Teresina, PI", 634.0)
        .add("Teresina, PI", "São Luís, MA", 446.0)
        // North
        .add("São Luís, MA", "Belém, PA", 806.0)
        .add("Brasília, DF", "Palmas, TO", 973.0)
        .add("Palmas, TO", "Belém, PA", 1283.0)
        .build()
}
