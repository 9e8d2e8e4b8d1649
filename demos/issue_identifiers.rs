use ghabz::{complete_bill_number, complete_payment_id, validate};

fn main() {
    // An issuer holds the 12 payload digits of the bill number (subscriber
    // account + bill-type digit) and the amount to collect.
    let bill = complete_bill_number("200700314152").expect("payload should be 12 digits");
    println!("issued bill number: {bill}");

    // Amount 90 units (90 000 Rials) with a 3-digit period counter.
    let payment = complete_payment_id(&bill, "00000090001").expect("payload should be payable");
    println!("issued payment id:  {payment}");

    // What the issuer writes, the validator accepts.
    let validated = validate(&bill, &payment).expect("issued pair should validate");
    println!(
        "validated: fee {} Rials, bill type {}",
        validated.fee, validated.bill_type
    );
}
