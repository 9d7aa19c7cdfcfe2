use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[weight(<integer expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    // Collect (variant_ident, weight_expr)
    let mut entries = Vec::new();

    for variant in &data_enum.variants {
        // Variants become `'static` table entries, so they must be fieldless
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            )
            .to_compile_error()
            .into();
        }

        let weight_expr = match find_weight(&variant.attrs) {
            Ok(Some(e)) => e,
            Ok(None) => {
                return syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
                    .to_compile_error()
                    .into();
            }
            Err(err) => return err.to_compile_error().into(),
        };

        if let Err(err) = check_weight(&weight_expr) {
            return err.to_compile_error().into();
        }

        let ident = &variant.ident;
        // typed as u64 so negative or float expressions fail to compile
        entries.push(quote! { (Self::#ident, { const WEIGHT: u64 = #weight_expr; WEIGHT }) });
    }

    // Generate const ENTRIES and helper draw_table() inherent as sugar.
    let expanded = quote! {
        impl seedpick::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, u64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a `DrawTable<#enum_ident>` from annotated weights.
            pub fn draw_table() -> ::core::result::Result<seedpick::DrawTable<Self>, seedpick::SampleError>
            where
                Self: Copy
            {
                <Self as seedpick::WeightedEnum>::draw_table()
            }
        }
    };

    expanded.into()
}

/// Parse the expression inside `#[weight(...)]`, if the attribute is present.
fn find_weight(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        if found.is_some() {
            return Err(syn::Error::new(list.span(), "duplicate #[weight(...)]"));
        }
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        found = Some(expr);
    }
    Ok(found)
}

/// Early, readable errors for the common mistakes: float literals and a
/// leading minus. Anything subtler (`1 - 2`, a path to an `f64` const) is
/// caught by the `u64` const the entry is emitted as.
fn check_weight(e: &Expr) -> syn::Result<()> {
    match e {
        Expr::Lit(el) => match &el.lit {
            Lit::Float(f) => Err(syn::Error::new(
                f.span(),
                "weights must be integers; scale fractional weights up",
            )),
            _ => Ok(()),
        },
        Expr::Binary(b) => {
            check_weight(&b.left)?;
            check_weight(&b.right)
        }
        Expr::Paren(p) => check_weight(&p.expr),
        Expr::Unary(u) if matches!(u.op, syn::UnOp::Neg(_)) => Err(syn::Error::new(
            u.span(),
            "weights must be non-negative",
        )),
        Expr::Unary(u) => check_weight(&u.expr),
        Expr::Group(g) => check_weight(&g.expr),
        _ => Ok(()),
    }
}
