use ghabz::validate;

fn main() {
    let pairs = [
        ("1234567890125", "1234554"),
        ("9876543210949", "2008150336"),
        ("7721217800141", "5479201"),
        ("1234567890123", "12"),
    ];

    for (bill_number, payment_id) in pairs {
        match validate(bill_number, payment_id) {
            Ok(bill) => {
                println!("{bill_number} / {payment_id}: payable {} Rials", bill.fee);
                match bill.service() {
                    Some(service) => println!("  service: {}", service.name()),
                    None => println!("  service: unassigned (type digit {})", bill.bill_type),
                }
                println!("  pay with id {}", bill.payment_id);
            }
            Err(err) => {
                println!("{bill_number} / {payment_id}: rejected — {err} (code {})", err.code());
            }
        }
    }
}
