//! Interactive confirmation prompts

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout; only an exact `Y` answer confirms
pub fn confirm(question: &str) -> bool {
    print!("{}", question);
    if io::stdout().flush().is_err() {
        return false;
    }
    read_confirmation(&mut io::stdin().lock())
}

fn read_confirmation(input: &mut impl BufRead) -> bool {
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => answer.trim_end_matches(&['\r', '\n'][..]) == "Y",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_capital_y_confirms() {
        assert!(read_confirmation(&mut "Y\n".as_bytes()));
        assert!(!read_confirmation(&mut "y\n".as_bytes()));
        assert!(!read_confirmation(&mut "\n".as_bytes()));
        assert!(!read_confirmation(&mut "".as_bytes()));
    }
}
