//! Directives with a pass-one effect beyond laying out the statement

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Start,
    End,
    Origin,
    Equ,
    Ltorg,
    Ds,
    Dc,
}

impl FromStr for Directive {
    type Err = ();

    fn from_str(mnemonic: &str) -> Result<Self, Self::Err> {
        match mnemonic {
            "START" => Ok(Directive::Start),
            "END" => Ok(Directive::End),
            "ORIGIN" => Ok(Directive::Origin),
            "EQU" => Ok(Directive::Equ),
            "LTORG" => Ok(Directive::Ltorg),
            "DS" => Ok(Directive::Ds),
            "DC" => Ok(Directive::Dc),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directives() {
        assert_eq!("ORIGIN".parse::<Directive>(), Ok(Directive::Origin));
        assert_eq!("DC".parse::<Directive>(), Ok(Directive::Dc));
        assert!("ADD".parse::<Directive>().is_err());
        assert!("start".parse::<Directive>().is_err());
    }
}
