//! Instrument and option types.

use super::rules::{first_match, Pattern, Rule};
use super::{wire_codec, FromDescription, Segment};

wire_codec! {
    /// Instrument type within a segment.
    pub enum InstrumentType: i32 {
        Equity = 0, "EQ", "Equity";
        PrefShares = 1, "PREFSHARES", "Preference shares";
        Debentures = 2, "DEBENTURES", "Debentures";
        Warrants = 3, "WARRANTS", "Warrants";
        Misc = 4, "MISC", "Miscellaneous";
        Index = 10, "INDEX", "Index";
        FutIdx = 11, "FUTIDX", "Index futures";
        FutIvx = 12, "FUTIVX", "Volatility index futures";
        FutStk = 13, "FUTSTK", "Stock futures";
        OptIdx = 14, "OPTIDX", "Index options";
        OptStk = 15, "OPTSTK", "Stock options";
        FutCur = 16, "FUTCUR", "Currency futures";
        FutIrt = 17, "FUTIRT", "Interest rate futures (T-bills)";
        FutIrc = 18, "FUTIRC", "Interest rate futures (GOI bonds)";
        OptCur = 19, "OPTCUR", "Currency options";
        UndCur = 20, "UNDCUR", "Currency underlying";
        UndIrc = 21, "UNDIRC", "Interest rate underlying (GOI bonds)";
        UndIrt = 22, "UNDIRT", "Interest rate underlying (T-bills)";
        UndIrd = 23, "UNDIRD", "Interest rate underlying (NSE bonds)";
        IndexCd = 24, "INDEX_CD", "Currency index";
        FutIrd = 25, "FUTIRD", "Interest rate futures (NSE bonds)";
        FutCom = 30, "FUTCOM", "Commodity futures";
        OptFut = 31, "OPTFUT", "Options on commodity futures";
        OptCom = 32, "OPTCOM", "Commodity options";
    }
}

impl InstrumentType {
    /// Segment the instrument trades in.
    pub fn segment(&self) -> Segment {
        use InstrumentType::*;
        match self {
            Equity | PrefShares | Debentures | Warrants | Misc | Index => Segment::Cm,
            FutIdx | FutIvx | FutStk | OptIdx | OptStk => Segment::Fo,
            FutCur | FutIrt | FutIrc | OptCur | UndCur | UndIrc | UndIrt | UndIrd | IndexCd
            | FutIrd => Segment::Cd,
            FutCom | OptFut | OptCom => Segment::Com,
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(
            self,
            InstrumentType::OptIdx
                | InstrumentType::OptStk
                | InstrumentType::OptCur
                | InstrumentType::OptFut
                | InstrumentType::OptCom
        )
    }
}

const COMMODITY: &[Pattern] = &[Pattern::Contains("commodit"), Pattern::Word("mcx")];
const CURRENCY: &[Pattern] = &[Pattern::Contains("currenc"), Pattern::Word("cds")];
const OPTION: &[Pattern] = &[
    Pattern::Contains("option"),
    Pattern::Word("opt"),
    Pattern::Word("ce"),
    Pattern::Word("pe"),
    Pattern::Word("call"),
    Pattern::Word("put"),
];
const FUTURE: &[Pattern] = &[Pattern::Contains("future"), Pattern::Word("fut")];
const INDEX: &[Pattern] = &[Pattern::Contains("index"), Pattern::Contains("indices")];
const VOLATILITY: &[Pattern] = &[Pattern::Contains("vix"), Pattern::Contains("volatility")];

impl FromDescription for InstrumentType {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            all_of: &[COMMODITY, OPTION],
            result: InstrumentType::OptCom,
        },
        Rule {
            all_of: &[COMMODITY],
            result: InstrumentType::FutCom,
        },
        Rule {
            all_of: &[CURRENCY, OPTION],
            result: InstrumentType::OptCur,
        },
        Rule {
            all_of: &[CURRENCY],
            result: InstrumentType::FutCur,
        },
        Rule {
            all_of: &[OPTION, INDEX],
            result: InstrumentType::OptIdx,
        },
        Rule {
            all_of: &[OPTION],
            result: InstrumentType::OptStk,
        },
        Rule {
            all_of: &[FUTURE, VOLATILITY],
            result: InstrumentType::FutIvx,
        },
        Rule {
            all_of: &[FUTURE, INDEX],
            result: InstrumentType::FutIdx,
        },
        Rule {
            all_of: &[FUTURE],
            result: InstrumentType::FutStk,
        },
        Rule {
            all_of: &[INDEX],
            result: InstrumentType::Index,
        },
    ];

    const DEFAULT: Self = InstrumentType::Equity;
}

wire_codec! {
    /// Call or put.
    pub enum OptionType: &'static str {
        Call = "CE", "CALL", "Call option";
        Put = "PE", "PUT", "Put option";
    }
}

const OPTION_TYPE_RULES: &[Rule<OptionType>] = &[
    Rule {
        all_of: &[&[Pattern::Contains("put"), Pattern::Word("pe")]],
        result: OptionType::Put,
    },
    Rule {
        all_of: &[&[Pattern::Contains("call"), Pattern::Word("ce")]],
        result: OptionType::Call,
    },
];

impl OptionType {
    /// Recover call/put from prose. There is no default: text that names
    /// neither is not an option.
    pub fn parse_description(text: &str) -> Option<Self> {
        first_match(text, OPTION_TYPE_RULES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::WireCode;

    #[test]
    fn test_wire_codes() {
        assert_eq!(InstrumentType::from_wire(14), Some(InstrumentType::OptIdx));
        assert_eq!(InstrumentType::from_wire(5), None);
        assert_eq!(InstrumentType::IndexCd.as_str(), "INDEX_CD");
        assert_eq!(OptionType::from_wire("PE"), Some(OptionType::Put));
    }

    #[test]
    fn test_segment_of_instrument() {
        assert_eq!(InstrumentType::OptStk.segment(), Segment::Fo);
        assert_eq!(InstrumentType::OptFut.segment(), Segment::Com);
        assert_eq!(InstrumentType::Index.segment(), Segment::Cm);
        assert!(InstrumentType::OptCur.is_option());
        assert!(!InstrumentType::FutCur.is_option());
    }

    #[test]
    fn test_parse_description_precedence() {
        assert_eq!(InstrumentType::parse_description("Crude oil commodity options"), InstrumentType::OptCom);
        assert_eq!(InstrumentType::parse_description("NIFTY index options CE"), InstrumentType::OptIdx);
        assert_eq!(InstrumentType::parse_description("SBIN 550 CE"), InstrumentType::OptStk);
        assert_eq!(InstrumentType::parse_description("India VIX futures"), InstrumentType::FutIvx);
        assert_eq!(InstrumentType::parse_description("Bank index futures"), InstrumentType::FutIdx);
        assert_eq!(InstrumentType::parse_description("USDINR currency futures"), InstrumentType::FutCur);
        assert_eq!(InstrumentType::parse_description("NIFTY 50 index"), InstrumentType::Index);
        assert_eq!(InstrumentType::parse_description("State Bank of India"), InstrumentType::Equity);
    }

    #[test]
    fn test_option_type_description() {
        assert_eq!(OptionType::parse_description("NIFTY 18000 PE"), Some(OptionType::Put));
        assert_eq!(OptionType::parse_description("call option"), Some(OptionType::Call));
        assert_eq!(OptionType::parse_description("price"), None);
    }
}
