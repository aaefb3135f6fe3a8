//! Per-language text table.
//!
//! Every fixed phrase that appears in a generated notice or on the printed
//! page lives here, so the generator and the renderer never branch on
//! language themselves. Adding a language means adding one more [`Locale`].

use crate::model::Language;

/// Fixed text placed around a substituted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub before: &'static str,
    pub after: &'static str,
}

impl Affix {
    pub fn wrap(&self, value: &str) -> String {
        format!("{}{}{}", self.before, value, self.after)
    }
}

/// Labels for the numbered particulars of a regular notice.
#[derive(Debug, Clone, Copy)]
pub struct RegularTemplate {
    pub subject: Affix,
    pub intro: &'static str,
    pub petitioner_name: &'static str,
    pub petition_number: &'static str,
    pub filing_date: &'static str,
    pub department: &'static str,
    pub sub_department: &'static str,
    pub closing: [&'static str; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct ContemptTemplate {
    pub subject: Affix,
    /// Wraps `"{case number}, {party name}"`.
    pub opening: Affix,
    pub expectation: &'static str,
    /// Wraps the hearing date (or [`ContemptTemplate::next_hearing`]).
    pub hearing: Affix,
    pub next_hearing: &'static str,
    pub closing: &'static str,
}

/// Text used on the printed page.
#[derive(Debug, Clone, Copy)]
pub struct PageText {
    pub organization: &'static str,
    pub urgency: &'static str,
    pub date_label: &'static str,
    pub letter_label: &'static str,
    pub subject_label: &'static str,
    pub number_and_date: &'static str,
    pub copy_to: &'static str,
    pub signature: &'static str,
    pub place: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub language: Language,
    pub page: PageText,
    pub signatory: &'static str,
    pub designation: &'static str,
    pub regular: RegularTemplate,
    pub contempt: ContemptTemplate,
}

/// Letter-number tokens. Always written in Hindi regardless of the draft language.
pub const CONTEMPT_TOKEN: &str = "अवमानना";
pub const WRIT_TOKEN: &str = "रिट";

pub static HINDI: Locale = Locale {
    language: Language::Hi,
    page: PageText {
        organization: "कार्यालय जिलाधिकारी, अयोध्या",
        urgency: "अति आवश्यक / सर्वोच्च प्राथमिकता",
        date_label: "दिनांक:",
        letter_label: "पत्रांक:",
        subject_label: "विषय-",
        number_and_date: "संख्या व दिनांक उपरोक्त।",
        copy_to: "प्रतिलिपि-जिलाधिकारी, महोदय को सादर अवलोकनार्थ।",
        signature: "हस्ताक्षर",
        place: "अयोध्या।",
    },
    signatory: "अपर जिलाधिकारी",
    designation: "(वि०/न्या०)/प्रभारी अधिकारी रिट",
    regular: RegularTemplate {
        subject: Affix {
            before: "रिट याचिका संख्या ",
            after: " के संबंध में",
        },
        intro: "कृपया उपर्युक्त विषयक का संदर्भ लें। उपरोक्त रिट याचिका के संबंध में मा० उच्च न्यायालय द्वारा निर्देशित कार्यवाही हेतु निम्नलिखित जानकारी प्रेषित की जा रही है:",
        petitioner_name: "याचिकाकर्ता का नाम",
        petition_number: "रिट याचिका संख्या",
        filing_date: "दाखिल दिनांक",
        department: "विभाग",
        sub_department: "उप-विभाग",
        closing: [
            "उपरोक्त मामले में आवश्यक कार्यवाही करने तथा प्रतिवेदन प्रेषित करने का कष्ट करें।",
            "कृपया इस मामले में तत्परता से आवश्यक कार्यवाही सुनिश्चित करें तथा अनुपालना रिपोर्ट इस कार्यालय को प्रेषित करने का कष्ट करें।",
        ],
    },
    contempt: ContemptTemplate {
        subject: Affix {
            before: "अवमानना आवेदन संख्या ",
            after: " में वांछित आवश्यक कार्यवाही किये जाने के सम्बन्ध में",
        },
        opening: Affix {
            before: "कृपया उपर्युक्त विषयक का सन्दर्भ ग्रहण करने का कष्ट करें। जिसके द्वारा अवमानना आवेदन संख्या ",
            after: " से सम्बंधित है।",
        },
        expectation: "प्रश्नगत अवमानना वाद में प्रभावी पैरवी/सम्पूर्ण विधिक कार्यवाही निर्धारित सीमा के भीतर पूर्ण कराने की अपेक्षा की गयी है।",
        hearing: Affix {
            before: "अतः वाद सम्बंधित अवमानना वाद में तत्परता प्रभावी पैरवी / सम्पूर्ण विधिक कार्यवाही निर्धारित सीमा के भीतर सुनिश्चित करायें। प्रश्नगत अवमानना वाद में ",
            after: " की तिथि नियत है।",
        },
        next_hearing: "अगली तारीख",
        closing: "यदि कोई अनिश्चित स्थिति उत्पन्न होती है तो आप स्वयं जिम्मेदार होंगे, तथा कृत कार्यवाही से जिलाधिकारी महोदय को अवगत कराने का कष्ट करें।",
    },
};

pub static ENGLISH: Locale = Locale {
    language: Language::En,
    page: PageText {
        organization: "Office of District Magistrate, Ayodhya",
        urgency: "Most Urgent / Highest Priority",
        date_label: "Date:",
        letter_label: "Letter No:",
        subject_label: "Subject-",
        number_and_date: "Number and date as above.",
        copy_to: "Copy to- District Magistrate, Sir for kind perusal.",
        signature: "Signature",
        place: "Ayodhya.",
    },
    signatory: "Additional District Magistrate",
    designation: "(Legal)/In-charge Officer Writ",
    regular: RegularTemplate {
        subject: Affix {
            before: "Regarding Writ Petition No. ",
            after: "",
        },
        intro: "Please refer to the above subject. The following information is being sent for the action directed by the Hon'ble High Court regarding the above writ petition:",
        petitioner_name: "Petitioner's Name",
        petition_number: "Writ Petition Number",
        filing_date: "Filing Date",
        department: "Department",
        sub_department: "Sub-Department",
        closing: [
            "Please take necessary action in the above matter and send the report.",
            "Please ensure prompt necessary action in this matter and send the compliance report to this office.",
        ],
    },
    contempt: ContemptTemplate {
        subject: Affix {
            before: "Regarding necessary action required in Contempt Application No. ",
            after: "",
        },
        opening: Affix {
            before: "Please refer to the above subject matter relating to Contempt Application No. ",
            after: ".",
        },
        expectation: "Effective advocacy/complete legal proceedings are expected to be completed within the prescribed limit in the contempt case in question.",
        hearing: Affix {
            before: "Therefore, ensure prompt effective advocacy/complete legal proceedings within the prescribed limit in the contempt case. The date ",
            after: " is fixed in the contempt case in question.",
        },
        next_hearing: "next hearing",
        closing: "If any uncertain situation arises, you will be responsible yourself, and please inform the District Magistrate about the action taken.",
    },
};

impl Language {
    /// Resolve the text table for this language.
    pub fn locale(self) -> &'static Locale {
        match self {
            Language::Hi => &HINDI,
            Language::En => &ENGLISH,
        }
    }
}
