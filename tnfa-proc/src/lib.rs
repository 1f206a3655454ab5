use proc_macro::TokenStream;
use syn::parse_macro_input;

extern crate proc_macro;

mod macro_postfix;

/// Convert an infix regular expression at compile time and generate an instance of <a href="struct.BorrowedPostfix.html">BorrowedPostfix</a>.  
/// Malformed patterns are reported as compile errors. An overview of the pattern syntax can be found here: <a href="index.html">tnfa</a>.
///
/// # Example
/// ```
/// # use tnfa_core as tnfa;
/// # use tnfa_core::*;
/// # use tnfa_proc::*;
/// static IDENTIFIER: BorrowedPostfix<'static> = postfix!("[a-z]([a-z]|[0-9])*");
/// let nfa = compiler::postfix_to_nfa(&IDENTIFIER).unwrap();
/// assert_eq!(nfa, regex_to_nfa("[a-z]([a-z]|[0-9])*").unwrap());
/// ```
#[proc_macro]
pub fn postfix(item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item);

    macro_postfix::postfix(item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
