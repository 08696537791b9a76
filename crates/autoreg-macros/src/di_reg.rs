//! 组件注册标注实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Ident, ItemStruct, Meta, Result, Token,
    Type,
};

/// 单条标注的参数
#[derive(Clone)]
pub struct DiRegArgs {
    /// 注册使用的抽象类型，缺省表示按具体类型注册
    pub abstraction: Option<Type>,
    /// 生命周期类型
    pub lifetime: MarkerLifetime,
}

/// 标注中的生命周期关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLifetime {
    Singleton,
    Scoped,
    Transient,
}

impl Default for DiRegArgs {
    fn default() -> Self {
        Self {
            abstraction: None,
            lifetime: MarkerLifetime::Transient,
        }
    }
}

impl Parse for DiRegArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = Self::default();

        loop {
            if input.is_empty() {
                break;
            }

            if input.peek(Token![dyn]) {
                let ty: Type = input.parse()?;
                args.abstraction = Some(ty);
            } else {
                let ident: Ident = input.parse()?;
                if ident == "singleton" {
                    args.lifetime = MarkerLifetime::Singleton;
                } else if ident == "scoped" {
                    args.lifetime = MarkerLifetime::Scoped;
                } else if ident == "transient" {
                    args.lifetime = MarkerLifetime::Transient;
                } else {
                    return Err(syn::Error::new(
                        ident.span(),
                        "未知的 di_reg 参数，支持: dyn Trait、singleton、scoped、transient",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// 实现 #[di_reg] 宏
pub fn di_reg_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let first_marker = if args.is_empty() {
        DiRegArgs::default()
    } else {
        match syn::parse::<DiRegArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let mut input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input_struct.generics,
            "di_reg 不支持泛型类型，注册键需要唯一的 TypeId",
        )
        .to_compile_error()
        .into();
    }

    // 收集并剥离结构体上剩余的 #[di_reg] 标注：属性宏由外向内展开，
    // 最外层的一次展开统一处理全部标注，实现同一类型上的多重注册
    let mut markers = vec![first_marker];
    let mut kept_attrs = Vec::new();
    for attr in input_struct.attrs.drain(..) {
        if attr.path().is_ident("di_reg") {
            let parsed = match &attr.meta {
                Meta::Path(_) => Ok(DiRegArgs::default()),
                Meta::List(list) => syn::parse2::<DiRegArgs>(list.tokens.clone()),
                Meta::NameValue(_) => Err(syn::Error::new_spanned(
                    &attr,
                    "di_reg 不接受名值形式的参数",
                )),
            };
            match parsed {
                Ok(marker) => markers.push(marker),
                Err(e) => return e.to_compile_error().into(),
            }
        } else {
            kept_attrs.push(attr);
        }
    }
    input_struct.attrs = kept_attrs;

    let struct_name = input_struct.ident.clone();
    let registrations = markers
        .iter()
        .enumerate()
        .map(|(index, marker)| generate_registration(&struct_name, marker, index));

    let expanded = quote! {
        #input_struct

        #(#registrations)*
    };

    TokenStream::from(expanded)
}

/// 生成单条标注的自动注册代码
fn generate_registration(
    struct_name: &Ident,
    marker: &DiRegArgs,
    index: usize,
) -> proc_macro2::TokenStream {
    let registration_fn_name = Ident::new(
        &format!(
            "__di_reg_{}_{}",
            struct_name.to_string().to_lowercase(),
            index
        ),
        Span::call_site(),
    );

    let lifetime = match marker.lifetime {
        MarkerLifetime::Singleton => quote! { autoreg_core::Lifetime::Singleton },
        MarkerLifetime::Scoped => quote! { autoreg_core::Lifetime::Scoped },
        MarkerLifetime::Transient => quote! { autoreg_core::Lifetime::Transient },
    };

    let record = match &marker.abstraction {
        Some(abstraction) => quote! {
            autoreg_core::RegistrationRecord::keyed::<#abstraction, #struct_name>(
                #lifetime,
                env!("CARGO_CRATE_NAME"),
                module_path!(),
                || ::std::sync::Arc::new(<#struct_name as ::core::default::Default>::default()),
            )
        },
        None => quote! {
            autoreg_core::RegistrationRecord::concrete::<#struct_name>(
                #lifetime,
                env!("CARGO_CRATE_NAME"),
                module_path!(),
            )
        },
    };

    // 使用 ctor 在程序启动时向全局注册表提交记录
    quote! {
        #[doc(hidden)]
        #[ctor::ctor]
        fn #registration_fn_name() {
            autoreg_core::submit_record(#record);
        }
    }
}
