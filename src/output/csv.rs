use std::io::{self, Write};

use crate::stats::aggregate::Aggregated;

/// Quote one CSV value: always wrapped in double quotes, embedded
/// quotes doubled.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Stream the aggregate as long-format CSV: a header of the two
/// dimension names plus `lines`, then one row per key pair. Rows are
/// written as they are produced, nothing is buffered.
pub fn write_counts<W: Write>(
    out: &mut W,
    primary: &str,
    secondary: &str,
    agg: &Aggregated,
) -> io::Result<()> {
    writeln!(out, "{primary},{secondary},lines")?;

    for (p, inner) in agg.counts() {
        for (s, n) in inner {
            writeln!(out, "{},{},{}", quote(p), quote(s), n)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Aggregated {
        let mut agg = Aggregated::default();
        agg.add("alice", "Last 30 days");
        agg.add("alice", "Last 30 days");
        agg.add("bob", "Older");
        agg
    }

    #[test]
    fn header_then_sorted_rows() {
        let mut buf = Vec::new();
        write_counts(&mut buf, "author", "bucket", &sample()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "author,bucket,lines",
                "\"alice\",\"Last 30 days\",2",
                "\"bob\",\"Older\",1",
            ]
        );
    }

    #[test]
    fn quote_doubles_embedded_quotes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn empty_aggregate_emits_header_only() {
        let mut buf = Vec::new();
        write_counts(&mut buf, "author", "bucket", &Aggregated::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "author,bucket,lines\n");
    }
}
