//! General category, script and block lookups.

use script_convert::{Classification, Classifier};
use unicode_blocks::find_unicode_block;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_script::UnicodeScript;

/// Block name used for code points outside every allocated block.
pub const NO_BLOCK: &str = "No_Block";

/// Short and long names of a general category.
#[allow(unreachable_patterns)]
pub fn category_names(category: GeneralCategory) -> (&'static str, &'static str) {
    use GeneralCategory as G;
    match category {
        G::UppercaseLetter => ("Lu", "Uppercase Letter"),
        G::LowercaseLetter => ("Ll", "Lowercase Letter"),
        G::TitlecaseLetter => ("Lt", "Titlecase Letter"),
        G::ModifierLetter => ("Lm", "Modifier Letter"),
        G::OtherLetter => ("Lo", "Other Letter"),
        G::NonspacingMark => ("Mn", "Nonspacing Mark"),
        G::SpacingMark => ("Mc", "Spacing Mark"),
        G::EnclosingMark => ("Me", "Enclosing Mark"),
        G::DecimalNumber => ("Nd", "Decimal Number"),
        G::LetterNumber => ("Nl", "Letter Number"),
        G::OtherNumber => ("No", "Other Number"),
        G::ConnectorPunctuation => ("Pc", "Connector Punctuation"),
        G::DashPunctuation => ("Pd", "Dash Punctuation"),
        G::OpenPunctuation => ("Ps", "Open Punctuation"),
        G::ClosePunctuation => ("Pe", "Close Punctuation"),
        G::InitialPunctuation => ("Pi", "Initial Punctuation"),
        G::FinalPunctuation => ("Pf", "Final Punctuation"),
        G::OtherPunctuation => ("Po", "Other Punctuation"),
        G::MathSymbol => ("Sm", "Math Symbol"),
        G::CurrencySymbol => ("Sc", "Currency Symbol"),
        G::ModifierSymbol => ("Sk", "Modifier Symbol"),
        G::OtherSymbol => ("So", "Other Symbol"),
        G::SpaceSeparator => ("Zs", "Space Separator"),
        G::LineSeparator => ("Zl", "Line Separator"),
        G::ParagraphSeparator => ("Zp", "Paragraph Separator"),
        G::Control => ("Cc", "Control"),
        G::Format => ("Cf", "Format"),
        G::Surrogate => ("Cs", "Surrogate"),
        G::PrivateUse => ("Co", "Private Use"),
        G::Unassigned => ("Cn", "Unassigned"),
        _ => ("Cn", "Unassigned"),
    }
}

/// Block name of `c`, or [`NO_BLOCK`].
pub fn block_name(c: char) -> &'static str {
    find_unicode_block(c).map_or(NO_BLOCK, |block| block.name())
}

/// Script name of `c`, e.g. `Latin` or `Common`.
pub fn script_name(c: char) -> &'static str {
    c.script().full_name()
}

/// Classify `c`. Unassigned code points have no classification.
pub fn classify(c: char) -> Option<Classification> {
    let (category, _) = category_names(get_general_category(c));
    if category == "Cn" {
        return None;
    }
    Some(Classification { category, script: script_name(c), block: block_name(c) })
}

/// [`Classifier`] backed by the bundled Unicode tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl Classifier for UnicodeClassifier {
    fn classify(&self, c: char) -> Option<Classification> {
        classify(c)
    }
}
