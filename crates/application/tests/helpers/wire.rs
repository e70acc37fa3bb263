#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Wire bytes of a standard recursive A query.
pub fn query_bytes(id: u16, domain: &str) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    encode(&message)
}

pub fn a_record(owner: &str, ttl: u32, addr: Ipv4Addr) -> Record {
    Record::from_rdata(Name::from_str(owner).unwrap(), ttl, RData::A(A(addr)))
}

pub fn aaaa_record(owner: &str, ttl: u32, addr: Ipv6Addr) -> Record {
    Record::from_rdata(Name::from_str(owner).unwrap(), ttl, RData::AAAA(AAAA(addr)))
}

pub fn cname_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        ttl,
        RData::CNAME(CNAME(Name::from_str(target).unwrap())),
    )
}

/// A NOERROR reply echoing the question and carrying the given answers.
pub fn reply_with_answers(id: u16, domain: &str, answers: Vec<Record>) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.add_query(query);
    for answer in answers {
        message.add_answer(answer);
    }
    message
}
