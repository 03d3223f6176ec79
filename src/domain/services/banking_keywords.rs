/// Terms that mark a question as banking-related. Matching is a
/// case-insensitive substring scan, so entries are lowercase and a term also
/// covers its longer forms ("bank" matches "banking", "banker").
///
/// Short acronyms that also occur inside ordinary words carry a leading space
/// (" emi" must not match "semi"), so they match only at the start of a word.
pub const BANKING_KEYWORDS: &[&str] = &[
    // institutions
    "bank",
    "credit union",
    "reserve bank",
    "central bank",
    // accounts
    "account",
    "savings",
    "deposit",
    "withdraw",
    "passbook",
    "cheque",
    "checkbook",
    "overdraft",
    "nominee",
    "minimum balance",
    "dormant",
    // lending
    "loan",
    "mortgage",
    "collateral",
    "interest",
    "installment",
    "instalment",
    " emi",
    "equated monthly instalment",
    "equated monthly installment",
    "repayment",
    "credit score",
    "cibil",
    "non-performing asset",
    "foreclosure",
    "guarantor",
    // cards and payments
    "credit card",
    "debit card",
    "atm",
    "upi",
    "neft",
    "rtgs",
    "imps",
    "ifsc",
    "swift",
    "wire transfer",
    "remittance",
    "payment",
    "transaction",
    // compliance
    "kyc",
    "know your customer",
    "anti-money laundering",
    " aml",
    // products and markets
    "fixed deposit",
    "recurring deposit",
    "demat",
    "mutual fund",
    "forex",
    "repo rate",
    "net banking",
    "mobile banking",
];
