//! Look up characters by name.

use std::io::{Write, stdout};

use anyhow::{Context, Result, bail};
use char_info::{lookup, search};

pub fn lookup_names(queries: &[String], search_mode: bool) -> Result<()> {
    write_lookups(&mut stdout().lock(), queries, search_mode)
}

/// Exact lookups print one character per line; searches print one
/// `U+XXXX<TAB>char<TAB>NAME` line per match.
pub fn write_lookups(out: &mut impl Write, queries: &[String], search_mode: bool) -> Result<()> {
    for query in queries {
        if search_mode {
            let matches = search(query);
            if matches.is_empty() {
                bail!("No character names match '{query}'");
            }
            for info in &matches {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    info.code_point_label(),
                    info.printable(),
                    info.name_or_placeholder()
                )?;
            }
        } else {
            let c = lookup(query).with_context(|| format!("Failed to look up '{query}'"))?;
            writeln!(out, "{c}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(queries: &[&str], search_mode: bool) -> Result<String> {
        let queries: Vec<String> = queries.iter().map(|q| q.to_string()).collect();
        let mut out = Vec::new();
        write_lookups(&mut out, &queries, search_mode)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_exact_lookup() {
        assert_eq!(run(&["snowman", "U+41"], false).unwrap(), "\u{2603}\nA\n");
    }

    #[test]
    fn test_unknown_name_fails() {
        assert!(run(&["definitely not a character"], false).is_err());
    }

    #[test]
    fn test_search_output() {
        let text = run(&["double-struck capital r"], true).unwrap();
        assert!(text.contains("U+211D\t\u{211D}\tDOUBLE-STRUCK CAPITAL R\n"));
    }
}
