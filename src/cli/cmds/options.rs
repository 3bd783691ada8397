use crate::base;
use crate::cli;

/// List the values each filter can take
#[derive(clap::Parser)]
pub struct Options {}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let s = items
        .into_iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if s.is_empty() { "-".to_string() } else { s }
}

impl Options {
    pub fn run(self, dashboard: base::Dashboard) -> anyhow::Result<cli::Output> {
        let choices = dashboard.choices();
        let lines = [
            ("Anos", join(&choices.years)),
            (
                "Meses",
                join(
                    choices
                        .months
                        .iter()
                        .map(|&(y, m)| base::locale::month_label(y, m)),
                ),
            ),
            ("Tipos", join(&choices.kinds)),
            ("Categorias", join(&choices.categories)),
            ("Subcategorias", join(&choices.subcategories)),
        ];
        let s = lines
            .iter()
            .map(|(name, values)| format!("{}: {}\n", name, values))
            .collect::<String>();
        Ok(cli::Output::Str(s))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    cli::testing::generate_testcases![
        (
            all_dimensions,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "options"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        indoc! {"
                            Anos: 2023, 2024
                            Meses: dez/2023, jan/2024, fev/2024
                            Tipos: Entrada, Saída
                            Categorias: Casa, Renda
                            Subcategorias: Luz, Mercado, Salário
                        "}
                        .to_string()
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source(indoc! {r#"
                        Data,Tipo,Valor,Categoria,Subcategoria
                        01/01/2024,Entrada,"1.000,00",Renda,Salário
                        05/01/2024,Saída,"250,50",Casa,Mercado
                        12/02/2024,Saída,"49,50",Casa,Luz
                        24/12/2023,Saída,"49,50",Casa,Luz
                    "#}),
            }
        ),
        (
            sparse_columns,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "options"],
                    res: cli::testing::ResultMatcher::OkPrinted(indoc! {"
                        Anos: 2024
                        Meses: mar/2024
                        Tipos: -
                        Categorias: -
                        Subcategorias: -
                    "}),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source("Data,Valor\n03/03/2024,10\n"),
            }
        ),
    ];
}
