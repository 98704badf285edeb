//! Text form of the pass-one tables (feature: "listing")

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::assembler::PassOneOutput;
use crate::error::AsmError;

pub const INTERMEDIATE_FILE: &str = "intermediate_code.txt";
pub const SYMBOL_FILE: &str = "symbol_table.txt";
pub const LITERAL_FILE: &str = "literal_table.txt";
pub const POOL_FILE: &str = "pool_table.txt";

impl PassOneOutput {
    /// `address<TAB>tag<TAB>operand` per record.
    pub fn write_intermediate<W: Write>(&self, mut w: W) -> io::Result<()> {
        for rec in &self.intermediate {
            writeln!(w, "{}", rec)?;
        }
        Ok(())
    }

    /// `name<TAB>address`, or `unresolved` for symbols never defined.
    pub fn write_symbols<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (name, value) in self.symbols.iter() {
            writeln!(w, "{}\t{}", name, value)?;
        }
        Ok(())
    }

    pub fn write_literals<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (idx, literal) in self.literals.all().iter().enumerate() {
            writeln!(w, "{}\t{}", idx, literal)?;
        }
        Ok(())
    }

    pub fn write_pools<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (idx, start) in self.pools.starts().iter().enumerate() {
            writeln!(w, "{}\t{}", idx, start)?;
        }
        Ok(())
    }

    /// Write the four tables into `dir`, one file each.
    pub fn save_tables<P: AsRef<Path>>(&self, dir: P) -> Result<(), AsmError> {
        let dir = dir.as_ref();
        save(&dir.join(INTERMEDIATE_FILE), |w| self.write_intermediate(w))?;
        save(&dir.join(SYMBOL_FILE), |w| self.write_symbols(w))?;
        save(&dir.join(LITERAL_FILE), |w| self.write_literals(w))?;
        save(&dir.join(POOL_FILE), |w| self.write_pools(w))?;
        Ok(())
    }

    pub fn print_tables(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "Intermediate Code:")?;
        self.write_intermediate(&mut out)?;
        writeln!(out, "\nSymbol Table:")?;
        self.write_symbols(&mut out)?;
        writeln!(out, "\nLiteral Table:")?;
        self.write_literals(&mut out)?;
        writeln!(out, "\nPool Table:")?;
        self.write_pools(&mut out)?;
        out.flush()
    }
}

fn save<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut w = BufWriter::new(File::create(path)?);
    write(&mut w)?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::assembler::Assembler;

    fn sample() -> crate::PassOneOutput {
        Assembler::new()
            .assemble("START 100\nL1 MOVER AREG, =5\nADD AREG, X\nX DC 1\nREAD Y\nEND")
            .unwrap()
    }

    fn text(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_symbol_table_text() {
        let out = sample();
        assert_eq!(
            text(|w| out.write_symbols(w)),
            "L1\t100\nX\t102\nY\tunresolved\n"
        );
    }

    #[test]
    fn test_literal_and_pool_text() {
        let out = sample();
        assert_eq!(text(|w| out.write_literals(w)), "0\t=5\n");
        assert_eq!(text(|w| out.write_pools(w)), "0\t104\n");
    }

    #[test]
    fn test_intermediate_text() {
        let out = sample();
        let listing = text(|w| out.write_intermediate(w));
        assert!(listing.starts_with("0\tSTART\t100\n100\tMOVER\tAREG, =5\n"));
        assert!(listing.ends_with("104\tEND\t\n104\tLITERAL\t=5\n"));
    }

    #[test]
    fn test_save_tables_writes_four_files() {
        let dir = std::env::temp_dir().join(format!("passone-listing-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        sample().save_tables(&dir).unwrap();

        let names = [
            super::INTERMEDIATE_FILE,
            super::SYMBOL_FILE,
            super::LITERAL_FILE,
            super::POOL_FILE,
        ];
        for name in names {
            assert!(dir.join(name).is_file(), "missing {}", name);
        }
        assert_eq!(fs::read_to_string(dir.join(super::POOL_FILE)).unwrap(), "0\t104\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_tables_into_missing_dir_is_io_error() {
        let err = sample().save_tables("/nonexistent/passone/out").unwrap_err();
        assert!(matches!(err, crate::AsmError::Io(_)));
    }
}
