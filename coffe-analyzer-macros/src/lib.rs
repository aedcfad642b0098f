use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for monotone formulas written in macro syntax
enum Expr {
    Variable(Ident),
    Literal(syn::LitStr),
    Constant(bool),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Generate code building a `Formula` from this node
    ///
    /// Identifiers are borrowed, so existing formulas can be reused after the
    /// macro call.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Variable(ident) => quote! { #ident },
            Expr::Literal(lit) => quote! { Formula::literal(#lit) },
            Expr::Constant(value) => quote! { Formula::constant(#value) },
            Expr::And(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).and(&(#right_tokens))
                }
            }
            Expr::Or(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).or(&(#right_tokens))
                }
            }
        }
    }
}

struct FormulaParser {
    expr: Expr,
}

impl Parse for FormulaParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_or(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after formula"));
        }
        Ok(FormulaParser { expr })
    }
}

/// Parse OR (lowest precedence)
fn parse_or(input: ParseStream) -> Result<Expr> {
    let mut left = parse_and(input)?;

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_and(input)?;
        left = Expr::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse AND (binds tighter than OR)
fn parse_and(input: ParseStream) -> Result<Expr> {
    let mut left = parse_atom(input)?;

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_atom(input)?;
        left = Expr::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_or(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "literal names must not be empty"));
        }
        Ok(Expr::Literal(lit))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Expr::Constant(false)),
            1 => Ok(Expr::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Expr::Variable(ident))
    }
}

/// Build a `Formula` with infix syntax
///
/// # Supported Syntax
///
/// - `"WBrake_F"` - a literal (creates `Formula::literal("WBrake_F")`)
/// - `f` - any `Formula` identifier in scope (borrowed)
/// - `0` / `1` - FALSE / TRUE
/// - `a * b` or `a & b` - AND
/// - `a + b` or `a | b` - OR
/// - `( ... )` - grouping
///
/// AND binds tighter than OR. There is no negation: CoFFE literals are never
/// complemented.
///
/// # Examples
///
/// ```ignore
/// use coffe_analyzer::{formula, Formula};
///
/// let overrun = formula!("WBrake_F" * ("Flap_D" + "Flap_F"));
/// let total = formula!("A_F" * "B_F" + "C_F" * "D_F");
/// let either = formula!(overrun + total);
/// ```
#[proc_macro]
pub fn formula(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as FormulaParser);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}
