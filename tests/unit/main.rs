// Unit tests for the figo client
